//! Labels shown to staff. The deployment locale is Mongolian.

/// Category label used when a record has no value for the counted field.
pub const UNSPECIFIED: &str = "Тодорхойгүй";

pub const LOGIN_FAILED: &str = "Алдаа гарлаа. Дахин оролдоно уу.";

pub const FETCH_FAILED: &str = "Өгөгдөл татахад алдаа гарлаа. Админтай холбоо барина уу.";

pub const SHEET_FILE_NAME: &str = "Оюутнуудын_мэдээлэл.csv";

pub const CURRENCY: &str = "₮";

/// Column headers of the exported roster, in column order.
pub const SHEET_HEADERS: [&str; 12] = [
    "Овог",
    "Нэр",
    "Сургууль",
    "Багшийн нэр",
    "Баг",
    "Тэмцээн төрөл",
    "Нас",
    "Утас",
    "Байршил",
    "Төлбөр",
    "Дүн",
    "Огноо",
];

/// Date layout used in the roster table and in the export.
pub const DATE_FORMAT: &str = "%Y.%m.%d";
