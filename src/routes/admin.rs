use actix_web::web;

use crate::handlers::admin::{
    event_handler,
    fixture_handler,
    match_handler,
    player_handler,
    referee_handler,
    report_handler,
    team_handler,
};

pub fn init_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            // Team management routes
            .service(
                web::resource("/teams")
                    .route(web::get().to(team_handler::get_teams))
                    .route(web::post().to(team_handler::create_team))
            )
            .service(
                web::resource("/teams/{id}")
                    .route(web::get().to(team_handler::get_team_by_id))
                    .route(web::put().to(team_handler::update_team))
                    .route(web::delete().to(team_handler::delete_team))
            )

            // Referee management routes
            .service(
                web::resource("/referees")
                    .route(web::get().to(referee_handler::get_referees))
                    .route(web::post().to(referee_handler::create_referee))
            )
            .service(
                web::resource("/referees/{id}")
                    .route(web::get().to(referee_handler::get_referee_by_id))
                    .route(web::put().to(referee_handler::update_referee))
                    .route(web::delete().to(referee_handler::delete_referee))
            )

            // Player management routes
            .service(
                web::resource("/players")
                    .route(web::get().to(player_handler::get_players))
                    .route(web::post().to(player_handler::create_player))
            )
            .service(
                web::resource("/players/{id}")
                    .route(web::get().to(player_handler::get_player_by_id))
                    .route(web::put().to(player_handler::update_player))
                    .route(web::delete().to(player_handler::delete_player))
            )

            // Match management routes
            .service(
                web::resource("/matches")
                    .route(web::get().to(match_handler::get_matches))
                    .route(web::post().to(match_handler::create_match))
            )
            .service(
                web::resource("/matches/{id}")
                    .route(web::get().to(match_handler::get_match_by_id))
                    .route(web::put().to(match_handler::update_match))
                    .route(web::delete().to(match_handler::delete_match))
            )
            .service(
                web::resource("/matches/{id}/goals")
                    .route(web::get().to(event_handler::get_goals))
                    .route(web::post().to(event_handler::create_goal))
            )
            .service(
                web::resource("/matches/{id}/goals/{goal_id}")
                    .route(web::put().to(event_handler::update_goal))
                    .route(web::delete().to(event_handler::delete_goal))
            )
            .service(
                web::resource("/matches/{id}/cards")
                    .route(web::get().to(event_handler::get_cards))
                    .route(web::post().to(event_handler::create_card))
            )
            .service(
                web::resource("/matches/{id}/cards/{card_id}")
                    .route(web::put().to(event_handler::update_card))
                    .route(web::delete().to(event_handler::delete_card))
            )
            .service(
                web::resource("/matches/{id}/report")
                    .route(web::get().to(report_handler::get_report))
                    .route(web::put().to(report_handler::upsert_report))
            )

            // Fixture generation
            .service(
                web::resource("/fixtures/generate")
                    .route(web::post().to(fixture_handler::generate_fixtures))
            )
    );
}
