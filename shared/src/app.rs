use tracing::{debug, error, info, instrument, warn};

use crate::capabilities::{lookup_url, read_lookup_response, Capabilities, GeolocationResult};
use crate::event::{Coordinate, Event, PetId};
use crate::model::{Model, ShareFlow};
use crate::pet::PetRecord;
use crate::share::{DeepLink, ShareChannel, ShareError, ShareMessage};
use crate::view::ViewModel;
use crate::{AppError, ErrorKind};

#[derive(Default)]
pub struct App;

impl App {
    #[instrument(skip_all, fields(pet_id = %id))]
    fn load_pet(id: PetId, model: &mut Model, caps: &Capabilities) {
        model.is_loading = true;
        model.error = None;

        let url = match lookup_url(&model.config.api_base_url, &id) {
            Ok(url) => url,
            Err(e) => {
                error!(error = %e, "cannot build pet lookup request");
                model.is_loading = false;
                model.error = Some(e.into());
                return;
            }
        };

        model.requested_id = Some(id.clone());
        caps.http
            .get(url.as_str())
            .header("Accept", "application/json")
            .send(move |response| Event::PetFetched {
                id,
                response: Box::new(response),
            });
    }

    fn start_share(model: &mut Model, caps: &Capabilities) {
        if model.share.is_busy() {
            debug!("share already in progress");
            return;
        }

        if !model.pet.as_ref().is_some_and(PetRecord::has_phone) {
            model.share = ShareFlow::Idle;
            model.notice = Some(ShareError::MissingPhoneNumber.into());
            return;
        }

        model.notice = None;
        model.share = ShareFlow::Locating;
        caps.geolocation
            .current_position(|result| Event::PositionReceived(Box::new(result)));
    }

    fn position_received(result: GeolocationResult, model: &mut Model) {
        if model.share != ShareFlow::Locating {
            debug!("ignoring position received outside of the share flow");
            return;
        }

        let fix = result
            .map_err(AppError::from)
            .and_then(|p| Coordinate::new(p.latitude, p.longitude).map_err(AppError::from));

        match fix {
            Ok(position) => {
                let message =
                    ShareMessage::new(position, &model.config.maps_base_url, model.locale());
                model.share = ShareFlow::Choosing { message };
            }
            Err(e) => {
                warn!(error = %e, "geolocation failed");
                model.share = ShareFlow::Idle;
                model.notice = Some(e);
            }
        }
    }

    #[instrument(skip(model, caps))]
    fn dispatch(channel: ShareChannel, model: &mut Model, caps: &Capabilities) {
        let ShareFlow::Choosing { message } = &model.share else {
            debug!("no share prompt open");
            return;
        };

        let link = match model.pet.as_ref().and_then(PetRecord::primary_phone) {
            Some(phone) => DeepLink::build(channel, phone, message, &model.config),
            None => Err(ShareError::MissingPhoneNumber),
        };

        match link {
            Ok(link) => {
                info!(navigation = ?link.target, "opening share link");
                caps.navigate.open(link.url.clone(), link.target);
                model.share = ShareFlow::Dispatched { link };
            }
            Err(e) => {
                warn!(error = %e, "cannot build share link");
                model.share = ShareFlow::Idle;
                model.notice = Some(e.into());
            }
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        debug!(
            event = event.name(),
            user_action = event.is_user_initiated(),
            "update"
        );

        match event {
            Event::Configure(config) => match config.validate() {
                Ok(()) => {
                    info!(locale = config.locale.tag(), "configuration applied");
                    model.config = *config;
                }
                Err(e) => {
                    warn!(error = %e, "configuration rejected, keeping previous");
                    model.notice = Some(e.into());
                }
            },

            Event::LocaleChanged { locale } => {
                model.config.locale = locale;
                if let ShareFlow::Choosing { message } = &mut model.share {
                    message.relocalize(locale);
                }
            }

            Event::RouteActivated(params) => {
                model.reset_screen();
                match params.pet_id() {
                    Some(id) => Self::load_pet(id, model, caps),
                    None => {
                        warn!("profile opened without a pet id");
                        model.error = Some(AppError::new(ErrorKind::MissingIdentifier));
                    }
                }
            }

            Event::PetFetched { id, response } => {
                if model.requested_id.as_ref() != Some(&id) {
                    debug!(pet_id = %id, "discarding response for a screen no longer shown");
                    return;
                }

                model.is_loading = false;
                match read_lookup_response(&id, *response) {
                    Ok(pet) => {
                        info!(pet_id = %id, "pet loaded");
                        model.pet = Some(pet);
                        model.error = None;
                    }
                    Err(e) => {
                        error!(pet_id = %id, status = ?e.status(), error = %e, "failed to load pet");
                        model.error = Some(e.into());
                    }
                }
            }

            Event::ScreenClosed => model.reset_screen(),

            Event::ShareLocationRequested => Self::start_share(model, caps),

            Event::PositionReceived(result) => Self::position_received(*result, model),

            Event::ShareChannelChosen { channel } => Self::dispatch(channel, model, caps),

            Event::ShareCancelled => {
                if matches!(model.share, ShareFlow::Choosing { .. }) {
                    model.share = ShareFlow::Idle;
                } else {
                    debug!("no share prompt to cancel");
                }
            }

            Event::NoticeDismissed => model.notice = None,
        }

        caps.render.render();
    }

    fn view(&self, model: &Model) -> ViewModel {
        ViewModel::from(model)
    }
}
