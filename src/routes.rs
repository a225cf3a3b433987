use crate::{
    api::{
        asset, dashboard, employee, evaluation, kpi, payroll, project, proposal, report, task,
        transaction, user,
    },
    auth::handlers,
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-scope limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let login_limiter = Arc::new(build_limiter(config.rate_login_per_min));
    let api_limiter = Arc::new(build_limiter(config.rate_api_per_min));

    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::scope("/auth")
                    .wrap(login_limiter)
                    .service(web::resource("/login").route(web::post().to(handlers::login)))
                    .service(web::resource("/register").route(web::post().to(handlers::register))),
            )
            .service(
                web::scope("")
                    .wrap(api_limiter)
                    .service(
                        web::resource("/dashboard/stats")
                            .route(web::get().to(dashboard::dashboard_stats)),
                    )
                    .service(
                        web::scope("/employees")
                            .service(
                                web::resource("")
                                    .route(web::get().to(employee::list_employees))
                                    .route(web::post().to(employee::create_employee)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .route(web::get().to(employee::get_employee))
                                    .route(web::put().to(employee::update_employee))
                                    .route(web::delete().to(employee::delete_employee)),
                            ),
                    )
                    .service(
                        web::scope("/projects")
                            .service(
                                web::resource("")
                                    .route(web::get().to(project::list_projects))
                                    .route(web::post().to(project::create_project)),
                            )
                            .service(
                                web::resource("/{id}/evaluation-summary")
                                    .route(web::get().to(project::project_evaluation_summary)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .route(web::get().to(project::get_project))
                                    .route(web::put().to(project::update_project))
                                    .route(web::delete().to(project::delete_project)),
                            ),
                    )
                    .service(
                        web::scope("/tasks")
                            .service(
                                web::resource("")
                                    .route(web::get().to(task::list_tasks))
                                    .route(web::post().to(task::create_task)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .route(web::get().to(task::get_task))
                                    .route(web::put().to(task::update_task))
                                    .route(web::delete().to(task::delete_task)),
                            ),
                    )
                    .service(
                        web::scope("/kpis")
                            .service(
                                web::resource("")
                                    .route(web::get().to(kpi::list_kpis))
                                    .route(web::post().to(kpi::create_kpi)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .route(web::get().to(kpi::get_kpi))
                                    .route(web::put().to(kpi::update_kpi))
                                    .route(web::delete().to(kpi::delete_kpi)),
                            ),
                    )
                    .service(
                        web::scope("/transactions")
                            .service(
                                web::resource("")
                                    .route(web::get().to(transaction::list_transactions))
                                    .route(web::post().to(transaction::create_transaction)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .route(web::get().to(transaction::get_transaction))
                                    .route(web::put().to(transaction::update_transaction))
                                    .route(web::delete().to(transaction::delete_transaction)),
                            ),
                    )
                    .service(
                        web::resource("/finance/totals")
                            .route(web::get().to(transaction::finance_totals)),
                    )
                    .service(
                        web::scope("/payroll")
                            .service(
                                web::resource("")
                                    .route(web::get().to(payroll::list_payroll))
                                    .route(web::post().to(payroll::create_payroll)),
                            )
                            // literal before the id matcher
                            .service(
                                web::resource("/totals")
                                    .route(web::get().to(payroll::payroll_totals)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .route(web::get().to(payroll::get_payroll))
                                    .route(web::put().to(payroll::update_payroll)),
                            ),
                    )
                    .service(
                        web::scope("/proposals")
                            .service(
                                web::resource("")
                                    .route(web::get().to(proposal::list_proposals))
                                    .route(web::post().to(proposal::create_proposal)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .route(web::get().to(proposal::get_proposal))
                                    .route(web::put().to(proposal::update_proposal))
                                    .route(web::delete().to(proposal::delete_proposal)),
                            ),
                    )
                    .service(
                        web::scope("/evaluations")
                            .service(
                                web::resource("")
                                    .route(web::get().to(evaluation::list_evaluations))
                                    .route(web::post().to(evaluation::create_evaluation)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .route(web::get().to(evaluation::get_evaluation))
                                    .route(web::put().to(evaluation::update_evaluation)),
                            ),
                    )
                    .service(
                        web::scope("/assets")
                            .service(
                                web::resource("")
                                    .route(web::get().to(asset::list_assets))
                                    .route(web::post().to(asset::create_asset)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .route(web::get().to(asset::get_asset))
                                    .route(web::put().to(asset::update_asset))
                                    .route(web::delete().to(asset::delete_asset)),
                            ),
                    )
                    .service(
                        web::scope("/users")
                            .service(
                                web::resource("")
                                    .route(web::get().to(user::list_users))
                                    .route(web::post().to(user::create_user)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .route(web::get().to(user::get_user))
                                    .route(web::put().to(user::update_user)),
                            ),
                    )
                    .service(
                        web::scope("/reports")
                            .service(
                                web::resource("")
                                    .route(web::get().to(report::list_reports))
                                    .route(web::post().to(report::create_report)),
                            )
                            .service(
                                web::resource("/{id}/view")
                                    .route(web::get().to(report::view_report)),
                            )
                            .service(
                                web::resource("/{id}/download")
                                    .route(web::get().to(report::download_report)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .route(web::get().to(report::get_report)),
                            ),
                    ),
            ),
    );
}
