mod create_issue;
mod delete_issue;
mod update_issue;
