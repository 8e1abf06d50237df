use crate::fakes::{FakeCluster, FakeTokenProgram, FakeWallet};
use egui_kittest::Harness;
use egui_kittest::kittest::{NodeT, Queryable};
use sol_token_tool::app::AppState;
use sol_token_tool::config::Config;
use sol_token_tool::context::AppContext;
use sol_token_tool::database::Database;
use sol_token_tool::utils::tasks::TaskManager;
use sol_token_tool::wallet::WalletAdapter;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const LAMPORTS: u64 = 2_500_000_000;

/// The app wired to in-memory chain clients, driven frame by frame.
///
/// Every frame runs inside the tokio runtime because the app spawns its
/// backend tasks from `update`.
pub struct TestApp {
    pub harness: Harness<'static, AppState>,
    pub cluster: Arc<FakeCluster>,
    pub token_program: Arc<FakeTokenProgram>,
    pub wallet: Arc<FakeWallet>,
    pub context: Arc<AppContext>,
    runtime: tokio::runtime::Runtime,
}

impl TestApp {
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("error,sol_token_tool=debug")
            .with_test_writer()
            .try_init();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        let db = Database::open_in_memory().expect("in-memory database");
        db.initialize().expect("schema");

        let cluster = Arc::new(FakeCluster::new(LAMPORTS));
        let token_program = Arc::new(FakeTokenProgram::default());
        let wallet = Arc::new(FakeWallet::new());
        let context = AppContext::with_clients(
            Config::default(),
            Arc::new(db),
            cluster.clone(),
            token_program.clone(),
            vec![wallet.clone() as Arc<dyn WalletAdapter>],
            TaskManager::new(),
        );

        let harness = {
            let _guard = runtime.enter();
            let app_context = context.clone();
            let mut harness = Harness::builder()
                .with_size(egui::vec2(1000.0, 700.0))
                .with_max_steps(100)
                .build_eframe(move |cc| AppState::new(cc.egui_ctx.clone(), app_context));
            harness.step();
            harness
        };

        Self {
            harness,
            cluster,
            token_program,
            wallet,
            context,
            runtime,
        }
    }

    pub fn step(&mut self) {
        let _guard = self.runtime.enter();
        self.harness.step();
    }

    pub fn steps(&mut self, count: usize) {
        for _ in 0..count {
            self.step();
        }
    }

    /// Steps frames until `condition` holds, giving background tasks time to
    /// deliver their results. Panics after five seconds.
    pub fn step_until(&mut self, what: &str, condition: impl Fn(&Self) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !condition(self) {
            assert!(Instant::now() < deadline, "timed out waiting for {}", what);
            std::thread::sleep(Duration::from_millis(10));
            self.step();
        }
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.harness.query_all_by_label(label).next().is_some()
    }

    /// Clicks the last widget with `label`; the connect prompt comes after
    /// the header in the tree.
    pub fn click(&mut self, label: &str) {
        self.harness
            .query_all_by_label(label)
            .last()
            .unwrap_or_else(|| panic!("no widget labelled {:?}", label))
            .click();
        self.step();
    }

    /// Whether the last widget with `label` accepts input.
    pub fn is_enabled(&self, label: &str) -> bool {
        let node = self
            .harness
            .query_all_by_label(label)
            .last()
            .unwrap_or_else(|| panic!("no widget labelled {:?}", label));
        !node.accesskit_node().is_disabled()
    }

    pub fn messages(&self) -> Vec<String> {
        self.harness
            .state()
            .root_screen
            .notifications()
            .iter()
            .map(|notification| notification.message.clone())
            .collect()
    }

    /// Connects the fake wallet through the wallet selector.
    pub fn connect(&mut self) {
        self.click("Select Wallet");
        self.click("Keypair File");
        self.step_until("wallet connection", |app| {
            app.context.session().is_connected()
        });
        self.step_until("first balance", |app| {
            app.harness.state().root_screen.balance_panel().snapshot().is_some()
        });
    }

    /// Fills the create form and submits it without waiting for the result.
    pub fn submit_create(&mut self, name: &str, symbol: &str) {
        {
            let panel = self.harness.state_mut().root_screen.token_panel_mut();
            panel.name = name.to_string();
            panel.symbol = symbol.to_string();
        }
        self.step();
        self.click("Create Token");
    }

    pub fn wait_until_idle(&mut self) {
        self.step_until("token action", |app| {
            !app.harness.state().root_screen.is_loading()
        });
    }
}
