pub mod text_item;
