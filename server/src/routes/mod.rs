use actix_web::web;

pub mod polls;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("").service(
            web::scope("/api").service(
                web::scope("/polls")
                    .service(
                        web::resource("")
                            .route(web::get().to(polls::index))
                            .route(web::post().to(polls::create)),
                    )
                    .service(
                        web::scope("/{id}")
                            .route("", web::get().to(polls::detail))
                            .route("/results", web::get().to(polls::results))
                            .route("/vote", web::post().to(polls::vote)),
                    ),
            ),
        ),
    );
}
