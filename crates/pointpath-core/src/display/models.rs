//! Display implementations for domain models.
//!
//! All Display trait implementations for the core domain models live here,
//! separated from the model definitions. Output is markdown-formatted for
//! rich terminal display; the plain-text roadmap export lives in
//! [`super::export`].

use std::fmt;

use super::{datetime::LocalDateTime, points::Points};
use crate::models::{
    CabinClass, FlightOption, HotelOption, Roadmap, Trip, TripStatus, TripType,
};

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {} → {}", self.id, self.origin, self.destination)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Status: {}", self.status.as_str())?;
        writeln!(f, "- Type: {}", self.trip_type)?;
        match self.return_date {
            Some(ret) => writeln!(f, "- Dates: {} - {ret}", self.depart_date)?,
            None => writeln!(f, "- Dates: {}", self.depart_date)?,
        }
        writeln!(f, "- Travelers: {}", self.travelers)?;
        if !self.points_programs.is_empty() {
            writeln!(f, "- Programs: {}", self.points_programs.join(", "))?;
        }
        if let Some(cabin) = self.cabin_preference {
            writeln!(f, "- Cabin: {cabin}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        match &self.selected_flight {
            Some(flight) => {
                writeln!(f, "\n## Selected flight")?;
                writeln!(f)?;
                write!(f, "{flight}")?;
            }
            None => writeln!(f, "\nNo flight selected.")?,
        }

        match &self.selected_hotel {
            Some(hotel) => {
                writeln!(f, "\n## Selected hotel")?;
                writeln!(f)?;
                write!(f, "{hotel}")?;
            }
            None => writeln!(f, "\nNo hotel selected.")?,
        }

        Ok(())
    }
}

impl fmt::Display for FlightOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.recommended {
            " (recommended)"
        } else {
            ""
        };
        writeln!(f, "### {} ({}){tag}", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Points: {}", Points(self.points))?;
        if let Some(fees) = self.fees {
            writeln!(f, "- Fees: ${fees}")?;
        }
        if !self.reason.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.reason)?;
        }
        Ok(())
    }
}

impl fmt::Display for HotelOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.recommended {
            " (recommended)"
        } else {
            ""
        };
        writeln!(f, "### {} ({}){tag}", self.title, self.id)?;
        writeln!(f)?;
        if self.is_cash_booking() {
            writeln!(f, "- Cash booking, no points required")?;
        } else {
            writeln!(f, "- Points per night: {}", Points(self.points_per_night))?;
            writeln!(
                f,
                "- Total: {} points for {} nights",
                Points(self.total_points),
                self.nights
            )?;
        }
        if !self.reason.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.reason)?;
        }
        Ok(())
    }
}

impl fmt::Display for Roadmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Booking Roadmap")?;
        writeln!(f)?;

        if !self.summary.route.is_empty() {
            writeln!(f, "- Route: {}", self.summary.route)?;
            writeln!(f, "- Dates: {}", self.summary.dates)?;
            writeln!(f, "- Travelers: {}", self.summary.travelers)?;
            writeln!(f)?;
        }

        for step in &self.steps {
            writeln!(f, "{}. {}", step.step, step.instruction)?;
            if let Some(details) = &step.details {
                writeln!(f, "   - {details}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "- Total points: {}", Points(self.total_points))?;
        writeln!(f, "- Total fees: ${}", self.total_fees)?;

        if let Some(backup) = &self.backup_option {
            writeln!(f)?;
            writeln!(f, "## Backup option")?;
            writeln!(f)?;
            writeln!(f, "{backup}")?;
        }

        Ok(())
    }
}
