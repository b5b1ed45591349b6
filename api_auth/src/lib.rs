use actix_web::web::{self};

pub mod middleware {
    pub mod auth;
}

pub mod routes {
    pub mod auth;
    pub mod contact;
    pub mod user;
}

mod services {
    pub(crate) mod auth;
    pub(crate) mod user;
}

mod dtos {
    pub(crate) mod auth;
    pub(crate) mod user;
}

pub use middleware::auth::{AuthedUser, MaybeAuthed, RequireAdmin, RequireTutor};

pub fn mount_auth() -> actix_web::Scope {
    web::scope("/auth")
        .service(routes::auth::post_register)
        .service(routes::auth::post_login)
        .service(routes::auth::get_me)
}

pub fn mount_users() -> actix_web::Scope {
    web::scope("/users")
        .service(routes::user::get_tutors)
        .service(routes::user::get_users)
        .service(routes::user::post_user)
        .service(routes::user::put_user)
        .service(routes::user::delete_user)
}

pub fn mount_contact() -> actix_web::Scope {
    web::scope("/contact").service(routes::contact::post_contact)
}
