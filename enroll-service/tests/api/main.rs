mod create_user;
mod helpers;
