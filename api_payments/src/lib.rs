use actix_web::web::{self};

pub mod routes {
    pub mod pay;
}

mod services {
    pub(crate) mod pay;
}

mod dtos {
    pub(crate) mod pay;
}

pub fn mount_payments() -> actix_web::Scope {
    web::scope("/payments")
        .service(routes::pay::post_checkout_session)
        .service(routes::pay::post_webhook)
        .service(routes::pay::get_session)
}
