//! The company object graph.
//!
//! A [`Company`] has customers and suppliers; a [`Customer`] has orders; an
//! [`Order`] has line items. The graph is built once (from JSON or by hand)
//! and then only read: every accessor returns a slice, which is a
//! [`Sequence`] and can be queried in place.

use serde::{Deserialize, Serialize};
use sieve::{MutableList, Sequence};

/// A company: the root of the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    name: String,
    #[serde(default)]
    customers: Vec<Customer>,
    #[serde(default)]
    suppliers: Vec<Supplier>,
}

impl Company {
    /// Creates a company from its customers and suppliers.
    pub fn new(
        name: impl Into<String>,
        customers: Vec<Customer>,
        suppliers: Vec<Supplier>,
    ) -> Self {
        Company {
            name: name.into(),
            customers,
            suppliers,
        }
    }

    /// The company's trading name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Customers in the order they were added.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Suppliers in the order they were added.
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Every customer's orders, customer by customer.
    pub fn orders(&self) -> MutableList<&Order> {
        self.customers.flat_collect(|customer| customer.orders.iter())
    }

    /// The customer added last, if any.
    pub fn most_recent_customer(&self) -> Option<&Customer> {
        self.customers.get_last()
    }

    /// Finds a customer by exact name.
    pub fn customer_named(&self, name: &str) -> Option<&Customer> {
        self.customers.detect_with(|customer, name| customer.name == *name, name)
    }
}

/// A customer and the orders they placed, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    city: String,
    #[serde(default)]
    orders: Vec<Order>,
}

impl Customer {
    /// Creates a customer with their orders, oldest first.
    pub fn new(name: impl Into<String>, city: impl Into<String>, orders: Vec<Order>) -> Self {
        Customer {
            name: name.into(),
            city: city.into(),
            orders,
        }
    }

    /// The customer's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The city the customer lives in, as entered.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// The customer's orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Returns `true` if the customer's city equals `city`, ignoring ASCII case.
    pub fn lives_in(&self, city: &str) -> bool {
        self.city.eq_ignore_ascii_case(city)
    }

    /// Sum of all order values.
    pub fn total_order_value(&self) -> f64 {
        self.orders.sum_of_double(Order::value)
    }
}

/// An order: an id and its line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: u32,
    #[serde(default)]
    line_items: Vec<LineItem>,
}

impl Order {
    /// Creates an order from its line items.
    pub fn new(id: u32, line_items: Vec<LineItem>) -> Self {
        Order { id, line_items }
    }

    /// The order number.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The line items, in the order they were added.
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// The order's value: the sum of its line item values, in item order.
    pub fn value(&self) -> f64 {
        self.line_items.sum_of_double(LineItem::value)
    }
}

/// One item on an order. The same item may appear several times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    name: String,
    value: f64,
}

impl LineItem {
    /// Creates a line item.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        LineItem {
            name: name.into(),
            value,
        }
    }

    /// The item's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item's price.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// A supplier and the names of the items it sells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    name: String,
    #[serde(default)]
    item_names: Vec<String>,
}

impl Supplier {
    /// Creates a supplier selling `item_names`.
    pub fn new<I, S>(name: impl Into<String>, item_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Supplier {
            name: name.into(),
            item_names: item_names.into_iter().map(Into::into).collect(),
        }
    }

    /// The supplier's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the items the supplier sells.
    pub fn item_names(&self) -> &[String] {
        &self.item_names
    }

    /// Returns `true` if the supplier sells `item`, ignoring ASCII case.
    pub fn supplies(&self, item: &str) -> bool {
        self.item_names
            .any_satisfy(|name| name.eq_ignore_ascii_case(item))
    }
}
