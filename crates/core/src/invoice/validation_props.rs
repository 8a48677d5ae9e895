//! Property tests for invoice invariant validation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::testing::invoice_between;
use super::validation::{validate, InvoiceField, ValidationPolicy};
use crate::company::Company;
use crate::invoice::Invoice;
use crate::ledger::Ledger;
use faktura_shared::types::Money;

/// An invoice with net in whole cents and vat at a random rate of 0-23%.
fn consistent_invoice_strategy() -> impl Strategy<Value = Invoice> {
    (1i64..10_000_000, 0u32..=23).prop_map(|(net_cents, rate_percent)| {
        let mine = Company::new("Mine", "MINE", true);
        let client = Company::new("Client", "CLI", false);

        let net = Decimal::new(net_cents, 2);
        let vat = net * Decimal::new(i64::from(rate_percent), 2);

        let mut invoice = invoice_between("FV prop/01/2024", &mine, &client);
        invoice.net_price = Money::new(net);
        invoice.vat = Money::new(vat);
        invoice.gross = Money::new(net + vat);
        invoice
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any invoice with gross = net + vat and vat within the cap passes.
    #[test]
    fn prop_consistent_invoice_accepted(invoice in consistent_invoice_strategy()) {
        prop_assert!(validate(&invoice, &Ledger::new(), &ValidationPolicy::default()).is_ok());
    }

    /// For every accepted invoice, gross - (net + vat) == 0 exactly.
    #[test]
    fn prop_accepted_implies_exact_gross(invoice in consistent_invoice_strategy()) {
        if validate(&invoice, &Ledger::new(), &ValidationPolicy::default()).is_ok() {
            prop_assert_eq!(invoice.gross - (invoice.net_price + invoice.vat), Money::ZERO);
        }
    }

    /// Any nonzero drift between gross and net + vat is caught on `gross`.
    #[test]
    fn prop_gross_drift_rejected(
        invoice in consistent_invoice_strategy(),
        drift_cents in prop_oneof![-10_000i64..0, 1i64..10_000],
    ) {
        let mut tampered = invoice;
        tampered.gross += Money::new(Decimal::new(drift_cents, 2));

        let violations =
            validate(&tampered, &Ledger::new(), &ValidationPolicy::default()).unwrap_err();
        prop_assert!(violations.iter().any(|v| v.field == InvoiceField::Gross));
    }

    /// VAT above the cap is caught on `vat`, even when gross stays exact.
    #[test]
    fn prop_excess_vat_rejected(
        invoice in consistent_invoice_strategy(),
        excess_cents in 1i64..10_000,
    ) {
        let mut tampered = invoice;
        let cap = tampered.net_price.amount() * Decimal::new(23, 2);
        tampered.vat = Money::new(cap + Decimal::new(excess_cents, 2));
        tampered.gross = tampered.net_price + tampered.vat;

        let violations =
            validate(&tampered, &Ledger::new(), &ValidationPolicy::default()).unwrap_err();
        prop_assert!(violations.iter().any(|v| v.field == InvoiceField::Vat));
    }
}
