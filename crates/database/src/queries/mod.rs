//! Database query operations organized by entity

pub mod authors;
pub mod books;
pub mod series;
pub mod teachers;
pub mod themes;

// Re-export commonly used query functions
pub use authors::{
    create_author, delete_author, get_author, list_authors, list_authors_with, restore_author,
    update_author,
};
pub use books::{
    create_book, delete_book, get_book, list_books, list_books_with, restore_book, update_book,
};
pub use series::{
    create_series, delete_series, get_series, list_series, list_series_with, restore_series,
    update_series,
};
pub use teachers::{
    create_teacher, delete_teacher, get_teacher, list_teachers, list_teachers_with,
    restore_teacher, update_teacher,
};
pub use themes::{
    create_theme, delete_theme, get_theme, list_themes, list_themes_with, restore_theme,
    update_theme,
};
