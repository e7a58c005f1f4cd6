mod nav;
pub use nav::SiteNav;

mod home;
pub use home::Home;

mod register;
pub use register::Register;

mod login;
pub use login::Login;

mod logout;
pub use logout::Logout;

mod dashboard;
pub use dashboard::Dashboard;

mod task_list;
pub use task_list::TaskList;

mod task_detail;
pub use task_detail::TaskDetail;

mod task_form;
pub use task_form::TaskForm;

mod task_new;
pub use task_new::TaskNew;

mod task_edit;
pub use task_edit::TaskEdit;

mod profile;
pub use profile::Profile;

mod unauthorized;
pub use unauthorized::Unauthorized;

mod forbidden;
pub use forbidden::Forbidden;

mod not_found;
pub use not_found::NotFound;
