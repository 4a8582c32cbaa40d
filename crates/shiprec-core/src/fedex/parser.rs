//! Shipment block segmentation and record assembly.

use tracing::{debug, info};

use crate::models::record::{Charges, ShipmentRecord};

use super::rules::{
    AmountResolver, LabelLineResolver, NEAR_WINDOW, PatternResolver, WindowedResolver,
    patterns::{DIMS_LINE, HEADER},
    resolve_amount,
};
use super::sections::{charges_section, tender_subtotal};

const TRANSPORTATION_LABEL: &str = "Transportation Charge";
const DISCOUNT_LABEL: &str = "Discount";
const FUEL_LABEL: &str = "Fuel Surcharge";

/// Recovers shipment records from a FedEx-format invoice text dump.
///
/// The parser is a pure function of its input: it keeps no state across
/// calls and can be shared freely between threads.
pub struct FedexInvoiceParser {
    resolvers: Vec<Box<dyn AmountResolver>>,
}

impl FedexInvoiceParser {
    /// Create a parser with the default strategy chain.
    pub fn new() -> Self {
        Self::with_window(NEAR_WINDOW)
    }

    /// Create a parser whose windowed fallback inspects `window` lines on
    /// each side of a label.
    pub fn with_window(window: usize) -> Self {
        Self {
            resolvers: vec![
                Box::new(LabelLineResolver),
                Box::new(PatternResolver),
                Box::new(WindowedResolver::new(window)),
            ],
        }
    }

    /// Parse the full invoice text into records, one per shipment block.
    ///
    /// A document without any header match yields an empty vec; a missing
    /// charge or footer within a block leaves that field absent.
    pub fn parse(&self, text: &str) -> Vec<ShipmentRecord> {
        let headers: Vec<regex::Captures<'_>> = HEADER.captures_iter(text).collect();
        info!("found {} shipment header(s)", headers.len());

        let mut records = Vec::with_capacity(headers.len());
        for (i, caps) in headers.iter().enumerate() {
            let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
            let end = headers
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map(|m| m.start())
                .unwrap_or(text.len());
            records.push(self.assemble_block(caps, &text[start..end]));
        }
        records
    }

    /// Build one record from its header captures and block text.
    fn assemble_block(&self, caps: &regex::Captures<'_>, block: &str) -> ShipmentRecord {
        let mut record = ShipmentRecord::from_header(
            &caps["shipment"],
            &caps["ship_date"],
            caps["service"].trim(),
            &caps["pieces"],
            caps["weight"].trim(),
            &caps["reference"],
            &caps["freight"],
            &caps["other_charges"],
            &caps["total"],
        );

        if let Some(dims) = DIMS_LINE.captures(block) {
            record.dims = Some(dims["dims"].trim().to_string());
            record.billed_weight = Some(dims["billed_weight"].trim().to_string());
        }

        // Charge fields are resolved against the isolated charges section
        // only, never the whole block.
        let section = charges_section(block);
        let charges = Charges {
            transportation_charge: resolve_amount(&self.resolvers, section, TRANSPORTATION_LABEL),
            discount: resolve_amount(&self.resolvers, section, DISCOUNT_LABEL),
            fuel_surcharge: resolve_amount(&self.resolvers, section, FUEL_LABEL),
        };
        if !charges.is_empty() {
            record.transportation_charge = charges.transportation_charge.clone();
            record.discount = charges.discount.clone();
            record.fuel_surcharge = charges.fuel_surcharge.clone();
            record.charges = Some(charges);
        }

        // The printed "Fuel Surcharge" cell is unreliable in this layout;
        // the header's other-charges column is trusted instead.
        if !record.other_charges.is_empty() {
            record.fuel_surcharge = Some(record.other_charges.clone());
            if let Some(charges) = record.charges.as_mut() {
                charges.fuel_surcharge = Some(record.other_charges.clone());
            }
        }

        if let Some((date, subtotal)) = tender_subtotal(block) {
            record.tendered_date = Some(date);
            record.subtotal_inr = Some(subtotal);
        }

        debug!(
            shipment = %record.shipment,
            reference = %record.reference,
            "assembled shipment record"
        );
        record
    }
}

impl Default for FedexInvoiceParser {
    fn default() -> Self {
        Self::new()
    }
}
