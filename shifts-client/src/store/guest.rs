//! Guest store

use std::sync::Arc;

use shared::API_CODE_SUCCESS;
use shared::models::{Guest, VisitSchedule, VisitType};
use tokio::sync::watch;

use super::{StateCell, expect_data};
use crate::{ClientResult, HttpClient, NetworkHttpClient, api};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestState {
    pub guest_list: Vec<Guest>,
    pub guest_detail: Option<Guest>,
    pub visit_types: Vec<VisitType>,
    pub visit_schedules: Vec<VisitSchedule>,
}

#[derive(Debug)]
pub struct GuestStore<C = NetworkHttpClient> {
    http: Arc<C>,
    state: StateCell<GuestState>,
}

impl<C: HttpClient> GuestStore<C> {
    pub fn new(http: Arc<C>) -> Self {
        Self {
            http,
            state: StateCell::default(),
        }
    }

    pub fn state(&self) -> GuestState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<GuestState> {
        self.state.subscribe()
    }

    pub async fn fetch_guest_list(&self) -> ClientResult<()> {
        let resp = api::guest::guest_list(self.http.as_ref()).await?;
        let list = expect_data(resp, API_CODE_SUCCESS)?;
        self.state.update(|s| s.guest_list = list);
        Ok(())
    }

    pub async fn fetch_guest_detail(&self, id: i64) -> ClientResult<()> {
        let resp = api::guest::guest_detail(self.http.as_ref(), id).await?;
        let guest = expect_data(resp, API_CODE_SUCCESS)?;
        self.state.update(|s| s.guest_detail = Some(guest));
        Ok(())
    }

    pub async fn fetch_visit_types(&self) -> ClientResult<()> {
        let resp = api::guest::visit_type_list(self.http.as_ref()).await?;
        let types = expect_data(resp, API_CODE_SUCCESS)?;
        self.state.update(|s| s.visit_types = types);
        Ok(())
    }

    pub async fn fetch_visit_schedules(&self) -> ClientResult<()> {
        let resp = api::guest::visit_schedule_list(self.http.as_ref()).await?;
        let schedules = expect_data(resp, API_CODE_SUCCESS)?;
        self.state.update(|s| s.visit_schedules = schedules);
        Ok(())
    }
}
