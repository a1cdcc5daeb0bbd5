use anyhow::{bail, Context};
use clap::{Args, Subcommand};

use campus_bites_client::admin::{self, DishForm};
use campus_bites_client::api::Backend;
use campus_bites_client::storefront::Storefront;
use campus_bites_common::dish::{Dish, DishId};
use campus_bites_common::order::{CustomerInfo, Order, OrderId, OrderStatus};

use crate::file_store::FileStore;

#[derive(Subcommand)]
pub enum Command {
    /// List the menu.
    Menu {
        /// Only show this category.
        #[arg(long)]
        category: Option<String>,
    },
    /// List menu categories.
    Categories,
    /// Inspect or change the saved cart.
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order for everything in the cart.
    Checkout {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        student_id: String,
        /// Special instructions for the kitchen.
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Menu and order management.
    Admin {
        #[command(subcommand)]
        area: AdminArea,
    },
}

#[derive(Subcommand)]
pub enum CartAction {
    Show,
    /// Add one of a dish by id.
    Add { dish_id: String },
    /// Take one of a dish out.
    Remove { dish_id: String },
    Clear,
}

#[derive(Subcommand)]
pub enum AdminArea {
    Dishes {
        #[command(subcommand)]
        action: DishAction,
    },
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
}

#[derive(Subcommand)]
pub enum DishAction {
    List,
    Add(DishFields),
    /// Change some fields of an existing dish.
    Update {
        id: String,
        #[command(flatten)]
        fields: DishFields,
    },
    Delete { id: String },
}

#[derive(Args)]
pub struct DishFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Price in dollars, e.g. 4.99.
    #[arg(long)]
    price: Option<String>,
    #[arg(long)]
    category: Option<String>,
    /// Image URL.
    #[arg(long)]
    image: Option<String>,
}

impl DishFields {
    fn apply(self, form: &mut DishForm) {
        let slots = [
            (self.name, &mut form.name),
            (self.description, &mut form.description),
            (self.price, &mut form.price),
            (self.category, &mut form.category),
            (self.image, &mut form.image),
        ];
        for (value, slot) in slots {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

#[derive(Subcommand)]
pub enum OrderAction {
    List,
    /// Set an order's status (pending, preparing, ready, delivered, cancelled).
    Status { id: String, status: OrderStatus },
}

pub async fn run<B: Backend>(command: Command, backend: &B, store: FileStore) -> anyhow::Result<()> {
    match command {
        Command::Menu { category } => {
            let mut shop = Storefront::new(store);
            shop.refresh(backend).await;
            if let Some(category) = category {
                shop.select_category(&category);
            }
            let dishes = shop.visible_dishes();
            if dishes.is_empty() {
                println!("No dishes on the menu.");
            }
            for dish in dishes {
                print_dish(dish);
            }
        }
        Command::Categories => {
            let mut shop = Storefront::new(store);
            shop.refresh(backend).await;
            for category in shop.categories() {
                println!("{category}");
            }
        }
        Command::Cart { action } => run_cart(action, backend, store).await?,
        Command::Checkout {
            name,
            email,
            student_id,
            notes,
        } => {
            let mut shop = Storefront::new(store);
            let customer = CustomerInfo {
                name,
                email,
                student_id,
                notes,
            };
            let order_id = shop
                .checkout(backend, customer)
                .await
                .context("Error submitting order. Please try again.")?;
            println!("Order placed successfully!");
            println!("Your order ID is: {order_id}");
        }
        Command::Admin { area } => match area {
            AdminArea::Dishes { action } => run_dishes(action, backend).await?,
            AdminArea::Orders { action } => run_orders(action, backend).await?,
        },
    }
    Ok(())
}

async fn run_cart<B: Backend>(action: CartAction, backend: &B, store: FileStore) -> anyhow::Result<()> {
    let mut shop = Storefront::new(store);
    match action {
        CartAction::Show => {}
        CartAction::Add { dish_id } => {
            shop.refresh(backend).await;
            let id = DishId(dish_id);
            if !shop.add_to_cart(&id) {
                bail!("no dish with id {id} on the menu");
            }
        }
        CartAction::Remove { dish_id } => {
            if !shop.remove_from_cart(&DishId(dish_id.clone())) {
                println!("{dish_id} is not in the cart.");
            }
        }
        CartAction::Clear => shop.clear_cart(),
    }

    let cart = shop.cart();
    if cart.is_empty() {
        println!("Your cart is empty");
        return Ok(());
    }
    for line in cart.lines() {
        println!(
            "{:>3} × {:<30} {:>9}   [{}]",
            line.quantity,
            line.name,
            line.subtotal().to_string(),
            line.dish_id
        );
    }
    let totals = cart.totals();
    println!("Total: {} ({} items)", totals.price, totals.items);
    Ok(())
}

async fn run_dishes<B: Backend>(action: DishAction, backend: &B) -> anyhow::Result<()> {
    let dishes = match action {
        DishAction::List => admin::load_dishes(backend).await,
        DishAction::Add(fields) => {
            let mut form = DishForm::new();
            fields.apply(&mut form);
            admin::save_dish(backend, &form)
                .await
                .context("Failed to save dish")?
        }
        DishAction::Update { id, fields } => {
            let id = DishId(id);
            let current = backend
                .list_dishes()
                .await
                .context("Error fetching dishes")?
                .into_iter()
                .find(|d| d.id == id)
                .with_context(|| format!("no dish with id {id}"))?;
            let mut form = DishForm::edit(&current);
            fields.apply(&mut form);
            admin::save_dish(backend, &form)
                .await
                .context("Failed to save dish")?
        }
        DishAction::Delete { id } => admin::delete_dish(backend, &DishId(id))
            .await
            .context("Failed to delete dish")?,
    };
    for dish in &dishes {
        print_dish(dish);
    }
    Ok(())
}

async fn run_orders<B: Backend>(action: OrderAction, backend: &B) -> anyhow::Result<()> {
    let orders = match action {
        OrderAction::List => admin::load_orders(backend).await,
        OrderAction::Status { id, status } => {
            admin::set_order_status(backend, &OrderId(id), status)
                .await
                .context("Failed to update order status")?
        }
    };
    if orders.is_empty() {
        println!("No orders found.");
    }
    for order in &orders {
        print_order(order);
    }
    Ok(())
}

fn print_dish(dish: &Dish) {
    println!(
        "{:<26} {:<14} {:>8}  {}",
        dish.id.0,
        dish.category,
        dish.price.to_string(),
        dish.name
    );
}

fn print_order(order: &Order) {
    println!(
        "{}  {:<20} {:>9}  {:<10} {}",
        order.id.short(),
        order.customer_info.name,
        order.total_price.to_string(),
        order.status.as_str(),
        order.placed_at().unwrap_or_default()
    );
    for item in &order.items {
        println!("    {} × {}", item.quantity, item.name);
    }
}
