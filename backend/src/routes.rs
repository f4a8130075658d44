use actix_web::web;

use crate::handlers;

// Route order matters for the /sales scope: the monthly_avg path has
// to be registered before the bare /sales/{district} match.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::health::health_check))
        .route("/search", web::get().to(handlers::search::search_answers))
        .route("/graph", web::get().to(handlers::graph::get_graph))
        .route(
            "/sales/monthly_avg/{district}",
            web::get().to(handlers::sales::monthly_avg),
        )
        .route("/sales/{district}", web::get().to(handlers::sales::sales_summary))
        .route(
            "/districts/cafe_ratio/{district}",
            web::get().to(handlers::sales::cafe_ratio),
        )
        .route(
            "/districts/cafe_count/{district}",
            web::get().to(handlers::sales::cafe_count),
        )
        .route(
            "/menu/price_stats/{district}",
            web::get().to(handlers::sales::menu_price_stats),
        )
        .route("/menu/popular/{district}", web::get().to(handlers::sales::popular_menu))
        .route("/save", web::post().to(handlers::save::save_answers));
}
