pub mod aside;
pub mod editor;
pub mod format;
pub mod forms;
pub mod layout;
pub mod modals;
pub mod pagination;
pub mod preview;
pub mod resource_list;
pub mod toast;
pub mod top_sheet;
