//! Meal store

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use shared::API_CODE_SUCCESS;
use shared::models::{MealOrder, MealOrderCount, MealType};
use tokio::sync::watch;

use super::{StateCell, expect_code, expect_data};
use crate::{ClientResult, HttpClient, NetworkHttpClient, api};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealState {
    pub meal_orders: Vec<MealOrder>,
    pub meal_types: Vec<MealType>,
    /// Last fetched count per day
    pub counts: BTreeMap<NaiveDate, MealOrderCount>,
    /// Periods with statistics (YYYY-MM)
    pub periods: Vec<String>,
}

#[derive(Debug)]
pub struct MealStore<C = NetworkHttpClient> {
    http: Arc<C>,
    state: StateCell<MealState>,
}

impl<C: HttpClient> MealStore<C> {
    pub fn new(http: Arc<C>) -> Self {
        Self {
            http,
            state: StateCell::default(),
        }
    }

    pub fn state(&self) -> MealState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<MealState> {
        self.state.subscribe()
    }

    pub async fn fetch_meal_orders(&self) -> ClientResult<()> {
        let resp = api::meal::meal_order_list(self.http.as_ref()).await?;
        let orders = expect_data(resp, API_CODE_SUCCESS)?;
        self.state.update(|s| s.meal_orders = orders);
        Ok(())
    }

    pub async fn fetch_meal_types(&self) -> ClientResult<()> {
        let resp = api::meal::meal_type_list(self.http.as_ref()).await?;
        let types = expect_data(resp, API_CODE_SUCCESS)?;
        self.state.update(|s| s.meal_types = types);
        Ok(())
    }

    /// Fetch the day's counts, keep them in state and return them
    pub async fn fetch_count(&self, date: NaiveDate) -> ClientResult<MealOrderCount> {
        let resp = api::meal::meal_order_count(self.http.as_ref(), date).await?;
        let count = expect_data(resp, API_CODE_SUCCESS)?;
        self.state.update(|s| {
            s.counts.insert(date, count);
        });
        Ok(count)
    }

    pub async fn fetch_periods(&self) -> ClientResult<()> {
        let resp = api::meal::stats_periods(self.http.as_ref()).await?;
        let periods = expect_data(resp, API_CODE_SUCCESS)?;
        self.state.update(|s| s.periods = periods);
        Ok(())
    }

    /// Trigger server-side generation; refetch orders to see the result
    pub async fn auto_generate(&self, date: NaiveDate) -> ClientResult<()> {
        let resp = api::meal::auto_generate(self.http.as_ref(), date).await?;
        expect_code(resp, API_CODE_SUCCESS)?;
        tracing::info!(%date, "Meal orders generated");
        Ok(())
    }
}
