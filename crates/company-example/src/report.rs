//! Report queries over a [`Company`].
//!
//! Each function is a short pipeline over the graph's slices. Functions that
//! return elements hand back references into the company, so results live as
//! long as the company they were computed from.

use sieve::{Criteria, DoubleList, MutableList, Op, PrimitiveSequence, Sequence};

use crate::domain::{Company, Customer, Order, Supplier};
use crate::error::CompanyError;

// ============================================================================
// Customers
// ============================================================================

/// Names of all customers, in the order they were added.
pub fn customer_names(company: &Company) -> MutableList<&str> {
    company.customers().collect(Customer::name)
}

/// Customers living in `city`, ignoring ASCII case.
pub fn customers_in<'c>(company: &'c Company, city: &str) -> MutableList<&'c Customer> {
    company
        .customers()
        .select_with(|customer, city| customer.lives_in(city), city)
}

/// Customers matching every filter that is set, in source order.
///
/// `name_pattern` is a regular expression searched for in the customer's
/// name. With no filters this returns every customer.
pub fn customers_matching<'c>(
    company: &'c Company,
    city: Option<&str>,
    min_total: Option<f64>,
    name_pattern: Option<&str>,
) -> Result<MutableList<&'c Customer>, CompanyError> {
    let mut criteria: Criteria<'_, Customer> = Criteria::new();
    if let Some(city) = city {
        criteria = criteria.and_eq_ignore_case(Customer::city, city);
    }
    if let Some(min_total) = min_total {
        criteria = criteria.and_attr(Customer::total_order_value, Op::Gte, min_total);
    }
    if let Some(pattern) = name_pattern {
        criteria = criteria.and_regex(Customer::name, pattern)?;
    }
    Ok(criteria.select_from(company.customers()))
}

// ============================================================================
// Orders and items
// ============================================================================

/// Distinct names of every item anybody ordered, sorted.
pub fn ordered_item_names(company: &Company) -> MutableList<&str> {
    let line_items = company
        .customers()
        .flat_collect(|customer| customer.orders().iter().flat_map(Order::line_items));
    line_items.collect(|item| item.name()).to_set().to_sorted_list()
}

/// Order values, for one customer or for the whole company.
pub fn order_values(company: &Company, customer: Option<&str>) -> Result<DoubleList, CompanyError> {
    match customer {
        Some(name) => {
            let customer = company
                .customer_named(name)
                .ok_or_else(|| CompanyError::unknown_customer(name))?;
            Ok(customer.orders().collect_double(Order::value))
        }
        None => Ok(company.orders().collect_double(|order| order.value())),
    }
}

/// Values of the named customer's orders that exceed `threshold`.
pub fn order_values_above(
    company: &Company,
    customer: &str,
    threshold: f64,
) -> Result<DoubleList, CompanyError> {
    let values = order_values(company, Some(customer))?;
    Ok(values.select(|value| value > threshold))
}

// ============================================================================
// Suppliers
// ============================================================================

/// Names of all suppliers, in the order they were added.
pub fn supplier_names(company: &Company) -> MutableList<&str> {
    company.suppliers().collect(Supplier::name)
}

/// The first supplier that sells `item`, ignoring ASCII case.
pub fn supplier_of<'c>(company: &'c Company, item: &str) -> Option<&'c Supplier> {
    company
        .suppliers()
        .detect_with(|supplier, item| supplier.supplies(item), item)
}

/// Suppliers that sell more than `n` items.
pub fn suppliers_with_more_than(company: &Company, n: usize) -> MutableList<&Supplier> {
    company
        .suppliers()
        .select(|supplier| supplier.item_names().len() > n)
}
