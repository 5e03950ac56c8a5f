use crate::action::{Action, Operation};
use crate::config::Connection;
use crate::error::{ClientError, Result};
use crate::order::{self, Order};
use crate::request::{Exchange, Request};
use crate::worker::{self, Schedule};
use reqwest::blocking::Client;
use std::path::PathBuf;
use std::time::Duration;

pub const CATEGORIES: [i64; 3] = [0, 1, 2];
pub const DEFAULT_ITEM_ID: i64 = 5;
/// Matches the server-side connection limit, enough to block every worker.
pub const DEFAULT_BURST: usize = 20;

/// Issues the requests of one operation against a single service.
pub struct Issuer {
    pub connection: Connection,
    pub client: Client,
    pub schedule: Schedule,
    pub verbosity: u64,
    pub orders_dir: PathBuf,
    pub all_orders: bool,
    pub burst_size: usize,
}

impl Issuer {
    pub fn new(connection: Connection, timeout: Option<Duration>) -> Result<Issuer> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::ClientBuild)?;
        Ok(Issuer {
            connection,
            client,
            schedule: Schedule::default(),
            verbosity: 0,
            orders_dir: PathBuf::from(order::DEFAULT_ORDERS_DIR),
            all_orders: false,
            burst_size: DEFAULT_BURST,
        })
    }

    pub fn dispatch(&self, action: &Action) -> Result<()> {
        println!("Operation: {}", action.operation);
        match action.operation {
            Operation::ListItems => self.list_items(action.item_id),
            Operation::CheckAvailability => self.availability(action.item_id),
            Operation::SubmitOrder => self.submit_orders(action.error_mode),
        }
    }

    pub fn catalog_urls(&self, item_id: Option<i64>) -> Vec<String> {
        let categories = match item_id {
            Some(id) => vec![id],
            None => CATEGORIES.to_vec(),
        };
        categories
            .iter()
            .map(|category| self.connection.endpoint(&format!("/catalog/list/{}", category)))
            .collect()
    }

    pub fn availability_url(&self, item_id: Option<i64>) -> String {
        let id = item_id.unwrap_or(DEFAULT_ITEM_ID);
        self.connection.endpoint(&format!("/availability/{}", id))
    }

    pub fn order_url(&self) -> String {
        self.connection.endpoint("/order")
    }

    pub fn list_items(&self, item_id: Option<i64>) -> Result<()> {
        let requests: Vec<Request> = self
            .catalog_urls(item_id)
            .into_iter()
            .map(Request::get)
            .collect();
        self.schedule
            .drive(|_| self.list_items_once(&requests).map(|_| ()))
    }

    /// One GET per catalog, in order; the first failure aborts the pass.
    pub fn list_items_once(&self, requests: &[Request]) -> Result<Vec<Exchange>> {
        let mut exchanges = Vec::with_capacity(requests.len());
        for request in requests {
            exchanges.push(self.execute(request)?);
        }
        Ok(exchanges)
    }

    pub fn availability(&self, item_id: Option<i64>) -> Result<()> {
        let request = Request::get(self.availability_url(item_id));
        self.schedule
            .drive(|_| self.availability_once(&request).map(|_| ()))
    }

    pub fn availability_once(&self, request: &Request) -> Result<Exchange> {
        self.execute(request)
    }

    /// Serialized bodies sent concurrently on each iteration.
    pub fn order_bodies(&self, error_mode: bool) -> Result<Vec<Vec<u8>>> {
        if error_mode {
            let body = Order::bad().to_json()?;
            return Ok(vec![body; self.burst_size]);
        }
        let orders = if self.all_orders {
            order::read_all_orders(&self.orders_dir)?
        } else {
            vec![order::read_first_order(&self.orders_dir)?]
        };
        orders.iter().map(Order::to_json).collect()
    }

    pub fn submit_orders(&self, error_mode: bool) -> Result<()> {
        let bodies = self.order_bodies(error_mode)?;
        log::info!("sending {} order(s) per iteration", bodies.len());
        self.schedule.drive(|_| {
            self.orders_once(&bodies);
            Ok(())
        })
    }

    /// Sends every body concurrently and waits for all of them. A failed
    /// attempt is logged and left in the outcomes; siblings carry on.
    pub fn orders_once(&self, bodies: &[Vec<u8>]) -> Vec<Result<Exchange>> {
        let url = self.order_url();
        worker::burst(bodies.len(), |id| {
            let request = Request::put_json(url.clone(), bodies[id].clone());
            let outcome = self.execute(&request);
            if let Err(e) = &outcome {
                log::error!("{}: Error {}", id, e);
            }
            outcome
        })
    }

    fn execute(&self, request: &Request) -> Result<Exchange> {
        if self.verbosity > 1 {
            println!("===== Request:\n{}\n===== Response:", request);
        }
        let exchange = request.execute(&self.client)?;
        if self.verbosity > 0 {
            println!("{}", exchange.verbose());
        } else {
            println!("{}", exchange);
        }
        Ok(exchange)
    }
}
