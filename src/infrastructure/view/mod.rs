pub mod logging_list_view;
