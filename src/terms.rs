//! Financial terms for import and export trades

use crate::types::Percent;
use serde::{Deserialize, Serialize};

/// Import-side duty, tax and margin rates.
///
/// All fields are percentages applied via `/100`, except
/// `finance_interest` which is a plain fraction applied directly
/// (0.02 = 2%). The asymmetry is deliberate and matched by the summary
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImportTerms {
    /// Customs duty on the CIF value (%)
    pub customs_duty: Percent,
    /// GST, levied on value plus duty (%)
    pub gst: Percent,
    /// Finance interest as a fraction of the CIF value
    pub finance_interest: f64,
    /// Agent commission (%)
    pub commission: Percent,
    /// Target margin over landed cost (%)
    pub margin: Percent,
}

impl Default for ImportTerms {
    fn default() -> Self {
        Self {
            customs_duty: 10.0,
            gst: 18.0,
            finance_interest: 0.02,
            commission: 0.0,
            margin: 20.0,
        }
    }
}

/// Export-side incentive, fee and margin rates (all percentages).
///
/// Incentive and rebate reduce the exporter's effective cost;
/// commission and bank charges add to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportTerms {
    /// Government export incentive on the FOB value (%)
    pub export_incentive: Percent,
    /// Tax rebate on the FOB value (%)
    pub tax_rebate: Percent,
    /// Bank charges on the FOB value (%)
    pub bank_charges: Percent,
    /// Agent commission (%)
    pub commission: Percent,
    /// Target margin over adjusted cost (%)
    pub margin: Percent,
}

impl Default for ExportTerms {
    fn default() -> Self {
        Self {
            export_incentive: 5.0,
            tax_rebate: 3.0,
            bank_charges: 0.5,
            commission: 2.0,
            margin: 25.0,
        }
    }
}
