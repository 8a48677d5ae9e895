//! Invoice fixtures shared by unit tests across the crate.

use chrono::NaiveDate;
use faktura_shared::types::{InvoiceId, Money};
use rust_decimal_macros::dec;

use crate::company::Company;
use crate::invoice::types::{Invoice, InvoiceKind};

/// A valid ORIGINAL invoice between the two companies: net 1000.00,
/// vat 230.00, gross 1230.00, dated January 2024.
pub fn invoice_between(name: &str, seller: &Company, buyer: &Company) -> Invoice {
    Invoice {
        id: InvoiceId::new(),
        name: name.to_string(),
        seller: seller.clone(),
        buyer: buyer.clone(),
        net_price: Money::new(dec!(1000.00)),
        vat: Money::new(dec!(230.00)),
        gross: Money::new(dec!(1230.00)),
        create_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        service_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        payment_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        kind: InvoiceKind::Original,
        linked_invoice: None,
        is_paid: false,
    }
}

/// A child of `parent` with the given kind, mirroring every field invariant 6
/// requires.
pub fn child_of(parent: &Invoice, name: &str, kind: InvoiceKind) -> Invoice {
    Invoice {
        id: InvoiceId::new(),
        name: name.to_string(),
        kind,
        linked_invoice: Some(parent.id),
        ..parent.clone()
    }
}
