use actix_web::web::{self};

pub mod routes {
    pub mod booking;
}

pub mod services {
    pub mod availability;
    pub mod booking;
}

mod dtos {
    pub(crate) mod booking;
}

pub fn mount_bookings() -> actix_web::Scope {
    // Fixed segments are registered ahead of the `{id}` routes so that
    // "availability", "my-sessions" and "all" are never captured as ids.
    web::scope("/bookings")
        .service(routes::booking::post_booking)
        .service(routes::booking::get_availability)
        .service(routes::booking::get_my_bookings)
        .service(routes::booking::get_my_sessions)
        .service(routes::booking::get_all_bookings)
        .service(routes::booking::get_booking)
        .service(routes::booking::put_booking)
        .service(routes::booking::delete_booking)
}
