mod list_branches;
