use actix_web::web;

pub mod health;
pub mod home;
pub mod login;
pub mod logout;
pub mod signup;

/// Login entry point; denied requests and failed logins land here.
pub const LOGIN_PATH: &str = "/login";
/// Default landing page after a successful login.
pub const HOME_PATH: &str = "/home";

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/signup")
            .service(signup::page)
            .service(signup::submit),
    );
    cfg.service(
        web::scope("/login")
            .service(login::page)
            .service(login::submit),
    );
    cfg.service(web::scope("/logout").service(logout::logout));
    cfg.service(web::scope("/home").service(home::home));
}
