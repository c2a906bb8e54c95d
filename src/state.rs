use crate::cache::{self, SeenSignatures};
use crate::clients::{ClientError, ExplorerClient, HeliusClient, MarketClient, TelegramClient};
use crate::config::Config;
use crate::store::WalletStore;
use tokio::sync::Mutex;

pub struct AppState {
    pub config: Config,
    pub seen: SeenSignatures,
    pub store: Mutex<WalletStore>,
    pub market: MarketClient,
    pub explorer: ExplorerClient,
    pub telegram: TelegramClient,
    pub helius: HeliusClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ClientError> {
        let store = WalletStore::load(&config.labels_file, &config.tracked_file);
        Ok(Self {
            seen: cache::init_seen_signatures(&config),
            store: Mutex::new(store),
            market: MarketClient::new(&config)?,
            explorer: ExplorerClient::new(&config),
            telegram: TelegramClient::new(&config),
            helius: HeliusClient::new(&config),
            config,
        })
    }
}
