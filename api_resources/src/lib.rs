use actix_web::web::{self};

pub mod routes {
    pub mod resource;
}

mod services {
    pub(crate) mod resource;
}

mod dtos {
    pub(crate) mod resource;
}

pub fn mount_resources() -> actix_web::Scope {
    web::scope("/resources")
        .service(routes::resource::get_resources)
        .service(routes::resource::post_resource)
        .service(routes::resource::post_download)
        .service(routes::resource::put_resource)
        .service(routes::resource::delete_resource)
}
