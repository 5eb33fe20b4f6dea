//! Planner operations that return formatted display wrapper types.

use super::Planner;
use crate::{
    display::{FlightOptions, HotelOptions, Trips},
    error::Result,
    params::{Id, ListTrips},
};

impl Planner {
    /// Handle listing trips as a displayable collection.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use pointpath_core::{params::ListTrips, PlannerBuilder};
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let trips = planner.list_trips_display(&ListTrips::default()).await?;
    /// println!("{trips}");
    /// # Result::<(), pointpath_core::TripError>::Ok(())
    /// # };
    /// ```
    pub async fn list_trips_display(&self, params: &ListTrips) -> Result<Trips> {
        Ok(Trips(self.list_trips_filtered(params).await?))
    }

    /// Handle listing flight options as a displayable collection.
    pub async fn flight_options_display(&self, params: &Id) -> Result<FlightOptions> {
        Ok(FlightOptions(self.flight_options(params).await?))
    }

    /// Handle listing hotel options as a displayable collection.
    pub async fn hotel_options_display(&self, params: &Id) -> Result<HotelOptions> {
        Ok(HotelOptions(self.hotel_options(params).await?))
    }
}
