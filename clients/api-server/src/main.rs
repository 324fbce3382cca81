use actix_cors::Cors;
use actix_web::{
    middleware::{self, Condition},
    web::Data,
    App, HttpServer,
};
use clap::Parser;
use std::io;

use crate::store::RecordStore;

mod page;
mod routes;
mod store;

/// 📇 Missing persons API server, serves the records file to the client for local development
#[derive(Parser, Debug)]
struct Cli {
    /// Records file, a JSON array. Created on the first write. Note: Does not support shell paths, e.g. ~
    #[clap(short, long, default_value = "dados_desaparecidos.json")]
    data: std::path::PathBuf,

    /// Port the API server will run on
    #[clap(short, long, default_value = "5000")]
    port: u16,

    /// Address the API server will run on
    #[clap(short, long, default_value = "127.0.0.1")]
    address: String,

    /// Log every HTTP request
    #[clap(long)]
    log_http: bool,

    #[clap(long, default_value_t = 2)]
    http_workers: usize,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let store = Data::new(RecordStore::new(args.data));

    log::info!("Serving records from {}", store.path().display());
    log::info!("starting HTTP server on port {}.", args.port);
    log::info!("Search page: http://{}:{}/busca", args.address, args.port);

    HttpServer::new(move || {
        let app = App::new()
            .app_data(store.clone())
            .configure(routes::configure)
            .wrap(Cors::permissive())
            .wrap(Condition::new(args.log_http, middleware::Logger::default()));

        app
    })
    .workers(args.http_workers)
    .bind((args.address, args.port))?
    .run()
    .await
}
