pub mod burger;
pub mod drawer;
pub mod gradient_text;
pub mod navigation;
pub mod project_card;
pub mod section_label;
pub mod section_wrapper;
pub mod stat_card;
pub mod tag_chip;
