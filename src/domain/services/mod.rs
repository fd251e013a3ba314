pub mod paginated_list_controller;
