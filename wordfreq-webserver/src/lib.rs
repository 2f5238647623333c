use std::net::IpAddr;

use rocket::{figment::Figment, Build, Config as RocketCfg, Rocket};

mod frontend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cfg {
    pub address: IpAddr,
    pub port: u16,
}

impl Cfg {
    fn figment(&self) -> Figment {
        RocketCfg::figment()
            .merge(("address", self.address))
            .merge(("port", self.port))
    }
}

pub(crate) fn rocket_instance(figment: Option<Figment>) -> Rocket<Build> {
    let r = match figment {
        Some(figment) => rocket::custom(figment),
        None => rocket::build(),
    };
    r.mount("/", frontend::routes())
}

pub async fn run(cfg: Cfg) {
    log::info!("Serving web application on {}:{}", cfg.address, cfg.port);
    let instance = rocket_instance(Some(cfg.figment()));
    if let Err(err) = instance.launch().await {
        log::error!("Unable to run web server: {err}");
    }
}
