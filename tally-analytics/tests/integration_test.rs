use rust_decimal_macros::dec;
use tally_analytics::OrdersAnalyzer;
use tally_domain::{Customer, Order, OrderLine, Product};

fn order_with(customer: &Customer, lines: &[(&Product, u32)]) -> Order {
    let mut order = Order::new(customer.clone());
    for (product, quantity) in lines {
        order.add_line(OrderLine::new((*product).clone(), *quantity).unwrap());
    }
    order
}

#[test]
fn test_storefront_week_of_orders() {
    let espresso = Product::new("Espresso", dec!(2.50)).unwrap();
    let latte = Product::new("Latte", dec!(3.20)).unwrap();
    let bagel = Product::new("Bagel", dec!(1.80)).unwrap();
    let tea = Product::new("Tea", dec!(2.00)).unwrap();

    let alex = Customer::new("Alex");
    let bo = Customer::new("Bo");
    let chris = Customer::new("Chris");

    let orders = vec![
        // Alex: 2.50 + 3.20 = 5.70
        order_with(&alex, &[(&espresso, 1), (&latte, 2)]),
        // Bo: (2.50 + 1.80) + 3.20 = 7.50 across two orders
        order_with(&bo, &[(&espresso, 1), (&bagel, 1)]),
        order_with(&bo, &[(&latte, 5)]),
        // Chris: 2.00 + 2.50 = 4.50
        order_with(&chris, &[(&tea, 1), (&espresso, 3)]),
        // An order with no lines is valid and contributes nothing
        Order::new(alex.clone()),
    ];

    let analyzer = OrdersAnalyzer::new();

    // Line occurrences: Espresso=3, Latte=2, Bagel=1, Tea=1 (Bagel < Tea by name)
    let top = analyzer.find_three_most_popular_products(orders.clone());
    let names: Vec<&str> = top.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Espresso", "Latte", "Bagel"]);

    // Totals: Alex 5.70, Bo 7.50, Chris 4.50
    assert_eq!(analyzer.find_most_valuable_customer(orders), Some(bo));
}

#[test]
fn test_no_orders_yields_empty_results() {
    let analyzer = OrdersAnalyzer::new();

    assert!(analyzer
        .find_three_most_popular_products(Vec::<Order>::new())
        .is_empty());
    assert_eq!(
        analyzer.find_most_valuable_customer(Vec::<Order>::new()),
        None
    );
}
