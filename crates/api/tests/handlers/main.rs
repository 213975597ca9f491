#[path = "../test_utils.rs"]
mod test_utils;

mod admin_test;
mod auth_test;
mod instructor_test;
mod middleware_test;
mod student_test;
