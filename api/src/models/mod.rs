pub mod faqs;
pub mod images;
pub mod menu_categories;
pub mod menu_items;
pub mod reviews;
pub mod users;
