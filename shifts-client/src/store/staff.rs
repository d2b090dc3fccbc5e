//! Staff store

use std::sync::Arc;

use chrono::NaiveDate;
use shared::models::{NightShiftResult, Role, ShiftType, Staff, WorkSchedule};
use shared::{API_CODE_CREATED, API_CODE_SUCCESS};
use tokio::sync::watch;

use super::{StateCell, expect_data};
use crate::{ClientResult, HttpClient, NetworkHttpClient, api};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaffState {
    pub staff_list: Vec<Staff>,
    pub staff_detail: Option<Staff>,
    pub roles: Vec<Role>,
    pub shift_types: Vec<ShiftType>,
    pub work_schedules: Vec<WorkSchedule>,
}

#[derive(Debug)]
pub struct StaffStore<C = NetworkHttpClient> {
    http: Arc<C>,
    state: StateCell<StaffState>,
}

impl<C: HttpClient> StaffStore<C> {
    pub fn new(http: Arc<C>) -> Self {
        Self {
            http,
            state: StateCell::default(),
        }
    }

    pub fn state(&self) -> StaffState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<StaffState> {
        self.state.subscribe()
    }

    pub async fn fetch_staff_list(&self) -> ClientResult<()> {
        let resp = api::staff::staff_list(self.http.as_ref()).await?;
        let list = expect_data(resp, API_CODE_SUCCESS)?;
        self.state.update(|s| s.staff_list = list);
        Ok(())
    }

    pub async fn fetch_staff_detail(&self, id: i64) -> ClientResult<()> {
        let resp = api::staff::staff_detail(self.http.as_ref(), id).await?;
        let staff = expect_data(resp, API_CODE_SUCCESS)?;
        self.state.update(|s| s.staff_detail = Some(staff));
        Ok(())
    }

    pub async fn fetch_roles(&self) -> ClientResult<()> {
        let resp = api::staff::role_list(self.http.as_ref()).await?;
        let roles = expect_data(resp, API_CODE_SUCCESS)?;
        self.state.update(|s| s.roles = roles);
        Ok(())
    }

    pub async fn fetch_shift_types(&self) -> ClientResult<()> {
        let resp = api::staff::shift_type_list(self.http.as_ref()).await?;
        let types = expect_data(resp, API_CODE_SUCCESS)?;
        self.state.update(|s| s.shift_types = types);
        Ok(())
    }

    pub async fn fetch_work_schedules(&self) -> ClientResult<()> {
        let resp = api::staff::work_schedule_list(self.http.as_ref()).await?;
        let schedules = expect_data(resp, API_CODE_SUCCESS)?;
        self.state.update(|s| s.work_schedules = schedules);
        Ok(())
    }

    /// Assign a three-day night shift; refetch schedules to see the result
    pub async fn assign_night_shift(
        &self,
        staff_id: i64,
        night_date: NaiveDate,
    ) -> ClientResult<NightShiftResult> {
        let resp = api::staff::assign_night_shift(self.http.as_ref(), staff_id, night_date).await?;
        let result = expect_data(resp, API_CODE_CREATED)?;
        tracing::info!(staff_id, %night_date, days = result.schedule.len(), "Night shift assigned");
        Ok(result)
    }
}
