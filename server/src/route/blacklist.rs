mod request;
mod response;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::blacklist::request::Transformer;
use crate::route::blacklist::response::{
    BlacklistDetailsPresenter, BlacklistPresenter, RemovePresenter,
};
use application::service::{GetBlacklistService, RemoveBlacklistService};
use axum::extract::{Path, State};
use axum::routing::{delete, get};
use axum::Router;
use uuid::Uuid;

pub trait BlacklistRouter {
    fn route_blacklist(self) -> Self;
}

impl BlacklistRouter for Router<AppModule> {
    fn route_blacklist(self) -> Self {
        self.route(
            "/blacklists",
            get(|State(handler): State<AppModule>| async move {
                Controller::new((), BlacklistPresenter)
                    .bypass(|| handler.storage().get_all())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/blacklists/details",
            get(|State(handler): State<AppModule>| async move {
                Controller::new((), BlacklistDetailsPresenter)
                    .bypass(|| handler.storage().get_blacklist_details())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/blacklists/:id",
            delete(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, RemovePresenter)
                        .intake(id)
                        .handle(|dto| handler.storage().remove(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
