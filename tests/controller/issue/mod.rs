mod create_issue;
