mod show_working_tree_details;
