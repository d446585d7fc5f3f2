use std::{path::PathBuf, process::ExitCode, sync::Arc};

use api::{ApiError, AuthApi, HttpApi, RegistrationSource};
use auth::{AuthManager, FileTokenStore, GateDecision, RoleGate, SessionState, TokenStore};
use clap::{Parser, Subcommand};
use enrollment::{save_sheet, Dashboard, LocationFilter, Roster, RosterQuery};
use env::Env;
use eyre::{bail, Context as _, Result};
use log::warn;
use model::{session::Session, user::Role};
use terminal::Terminal;

mod render;
mod terminal;

#[derive(Parser)]
#[command(name = "enrollment-cli", version, about = "Registration statistics and roster")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and remember the session token.
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Forget the stored session token.
    Logout,
    /// Show the user of the stored session.
    Whoami,
    /// Registration statistics per category.
    Stats,
    /// Registrations as submitted.
    Roster {
        #[command(flatten)]
        filter: Filter,
    },
    /// Write the filtered roster to a spreadsheet file.
    Export {
        #[command(flatten)]
        filter: Filter,
        /// Target directory, EXPORT_DIR by default.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct Filter {
    /// Matches first names, last names or the contact phone.
    #[arg(short, long, default_value = "")]
    search: String,
    /// Exact location name, or `all`.
    #[arg(short, long, default_value = "all")]
    location: LocationFilter,
}

impl From<Filter> for RosterQuery {
    fn from(filter: Filter) -> Self {
        RosterQuery::new(filter.search, filter.location)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Reads `.env` as well, so it has to run before the logger picks up RUST_LOG.
    let env = Env::load();
    pretty_env_logger::init();
    color_eyre::install()?;

    let cli = Cli::parse();
    let env = env.context("Failed to load configuration")?;
    let app = App::new(
        Arc::new(HttpApi::new(env.api_url())),
        Arc::new(FileTokenStore::new(env.session_file())),
    );

    match cli.command {
        Command::Login { username, password } => {
            if !app.login(&username, &password).await {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Logout => {
            app.auth.logout();
            println!("Logged out");
        }
        Command::Whoami => app.whoami().await,
        Command::Stats => app.stats().await?,
        Command::Roster { filter } => app.roster(filter.into()).await?,
        Command::Export { filter, out } => {
            let dir = out.unwrap_or_else(|| env.export_dir().to_path_buf());
            app.export(filter.into(), dir).await?
        }
    }
    Ok(ExitCode::SUCCESS)
}

struct App {
    registrations: Arc<dyn RegistrationSource>,
    auth: AuthManager,
    terminal: Arc<Terminal>,
}

impl App {
    fn new<A>(api: Arc<A>, tokens: Arc<dyn TokenStore>) -> Self
    where
        A: AuthApi + RegistrationSource + 'static,
    {
        let terminal = Arc::new(Terminal::default());
        let auth = AuthManager::new(api.clone(), tokens, terminal.clone(), terminal.clone());
        App {
            registrations: api,
            auth,
            terminal,
        }
    }

    /// The failure itself is already shown by the notifier.
    async fn login(&self, username: &str, password: &str) -> bool {
        match self.auth.login(username, password).await {
            Ok(user) => {
                println!("Logged in as {} ({})", user.username, user.role.name());
                true
            }
            Err(_) => false,
        }
    }

    async fn whoami(&self) {
        self.auth.restore_session().await;
        match self.auth.state() {
            SessionState::Authenticated(session) => {
                let user = session.user();
                println!("{} ({})", user.username, user.role.name());
            }
            SessionState::Restoring | SessionState::Unauthenticated => {
                println!("Not logged in");
            }
        }
    }

    /// Restores the session and lets only admins through.
    async fn admin_session(&self) -> Result<Session> {
        let gate = RoleGate::new(Role::Admin);
        let (_, decision) = tokio::join!(
            self.auth.restore_session(),
            gate.wait(self.auth.store(), self.terminal.as_ref())
        );
        match (decision, self.auth.state()) {
            (GateDecision::Render, SessionState::Authenticated(session)) => Ok(session),
            _ => bail!("An admin session is required, run `login` first"),
        }
    }

    fn check_fetch(&self, error: Option<&ApiError>, banner: Option<&str>) {
        if let Some(err) = error {
            if err.is_auth() {
                warn!("Session token was rejected");
                self.auth.expire();
            }
        }
        if let Some(banner) = banner {
            eprintln!("{}", banner);
        }
    }

    async fn stats(&self) -> Result<()> {
        let session = self.admin_session().await?;
        let view = Dashboard::new(self.registrations.clone())
            .load(Some(session.token()))
            .await;
        self.check_fetch(view.error.as_ref(), view.banner());
        print!("{}", render::dashboard(&view)?);
        Ok(())
    }

    async fn roster(&self, query: RosterQuery) -> Result<()> {
        let session = self.admin_session().await?;
        let view = Roster::new(self.registrations.clone())
            .load(Some(session.token()))
            .await;
        self.check_fetch(view.error.as_ref(), view.banner());
        print!("{}", render::roster(&view.page(&query))?);
        Ok(())
    }

    async fn export(&self, query: RosterQuery, dir: PathBuf) -> Result<()> {
        let session = self.admin_session().await?;
        let view = Roster::new(self.registrations.clone())
            .load(Some(session.token()))
            .await;
        self.check_fetch(view.error.as_ref(), view.banner());
        let page = view.page(&query);
        let path = save_sheet(&page.export_rows(), &dir)?;
        println!("Saved {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Credentials, LoginResponse};
    use async_trait::async_trait;
    use auth::{MemoryTokenStore, Navigator};
    use model::{registration::GroupRecord, user::User};

    struct FakeApi {
        role: Option<Role>,
    }

    #[async_trait]
    impl AuthApi for FakeApi {
        async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
            match self.role {
                Some(role) => Ok(LoginResponse {
                    token: "valid".to_owned(),
                    user: User {
                        id: "u1".to_owned(),
                        username: credentials.username.clone(),
                        role,
                    },
                }),
                None => Err(ApiError::Auth {
                    message: Some("Нууц үг буруу".to_owned()),
                }),
            }
        }

        async fn current_user(&self, _token: &str) -> Result<User, ApiError> {
            Err(ApiError::Auth { message: None })
        }
    }

    #[async_trait]
    impl RegistrationSource for FakeApi {
        async fn registrations(&self, _token: Option<&str>) -> Result<Vec<GroupRecord>, ApiError> {
            Ok(Vec::new())
        }
    }

    fn app(role: Option<Role>) -> (App, Arc<MemoryTokenStore>) {
        let tokens = Arc::new(MemoryTokenStore::default());
        (App::new(Arc::new(FakeApi { role }), tokens.clone()), tokens)
    }

    #[tokio::test]
    async fn test_login_success_exits_cleanly() {
        let (app, tokens) = app(Some(Role::Admin));
        assert!(app.login("admin", "secret").await);
        assert_eq!(tokens.load().unwrap().as_deref(), Some("valid"));
    }

    #[tokio::test]
    async fn test_rejected_login_exits_with_failure() {
        let (app, tokens) = app(None);
        assert!(!app.login("admin", "wrong").await);
        assert_eq!(app.auth.state(), SessionState::Unauthenticated);
        assert_eq!(tokens.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_admin_session_requires_login() {
        let (app, _) = app(Some(Role::Admin));
        assert!(app.admin_session().await.is_err());
        assert_eq!(app.terminal.current().as_deref(), Some(auth::LOGIN_PATH));
    }
}
