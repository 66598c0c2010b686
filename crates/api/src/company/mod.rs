mod compare_companies;
mod create_company;
mod delete_company;
mod get_company;
mod list_companies;
mod update_company;

use actix_web::web;
use compare_companies::compare_companies_controller;
use create_company::create_company_controller;
use delete_company::delete_company_controller;
use get_company::get_company_controller;
use list_companies::list_companies_controller;
use update_company::update_company_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/companies", web::get().to(list_companies_controller));
    cfg.route("/companies", web::post().to(create_company_controller));

    cfg.route(
        "/companies/{company_id}",
        web::get().to(get_company_controller),
    );
    cfg.route(
        "/companies/{company_id}",
        web::put().to(update_company_controller),
    );
    cfg.route(
        "/companies/{company_id}",
        web::delete().to(delete_company_controller),
    );

    cfg.route("/compare", web::post().to(compare_companies_controller));
}
