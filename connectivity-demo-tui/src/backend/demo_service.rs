//! 演示服务
//!
//! 持有 tokio 运行时和全部面板控制器，提供给 UI 层的统一接口。
//! 所有方法都立即返回：检查序列在运行时的工作线程上执行，结果由
//! 控制器写进自己的显示状态。

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use connectivity_demo_core::types::{DbCredentials, DemoConfig, PanelDisplay, RunnerConfig};
use connectivity_demo_core::{DemoGateway, HttpDemoGateway, PanelController};

/// TUI 后端服务
pub struct DemoService {
    runtime: Runtime,
    configs: Vec<DemoConfig>,
    controllers: Vec<Arc<PanelController>>,
}

impl DemoService {
    /// 根据运行配置创建服务实例
    pub fn new(config: RunnerConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .context("building tokio runtime")?;

        let gateway: Arc<dyn DemoGateway> = Arc::new(HttpDemoGateway::new(&config.base_url));

        let configs = config.panels;
        let controllers = configs
            .iter()
            .map(|panel| {
                PanelController::new(panel.clone(), Arc::clone(&gateway))
                    .map(Arc::new)
                    .with_context(|| format!("creating controller for panel {}", panel.id))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            runtime,
            configs,
            controllers,
        })
    }

    /// 面板配置（与控制器同序）
    #[must_use]
    pub fn configs(&self) -> &[DemoConfig] {
        &self.configs
    }

    /// 某个面板的当前显示快照
    ///
    /// 从主循环线程调用（运行时之外），所以可以用阻塞读。
    #[must_use]
    pub fn snapshot(&self, index: usize) -> Option<PanelDisplay> {
        self.controllers
            .get(index)
            .map(|controller| controller.blocking_snapshot())
    }

    /// 进入某个面板的运行视图
    pub fn start(&self, index: usize) {
        if let Some(controller) = self.controllers.get(index) {
            let controller = Arc::clone(controller);
            self.runtime.spawn(async move {
                controller.start().await;
            });
        }
    }

    /// 执行某个面板的检查序列
    pub fn run(&self, index: usize, credentials: Option<DbCredentials>) {
        if let Some(controller) = self.controllers.get(index) {
            let controller = Arc::clone(controller);
            self.runtime.spawn(async move {
                controller.run(credentials.as_ref()).await;
            });
        }
    }

    /// 把所有面板重置回空闲状态（切换导航分区时调用）
    pub fn reset_all(&self) {
        for controller in &self.controllers {
            let controller = Arc::clone(controller);
            self.runtime.spawn(async move {
                controller.reset().await;
            });
        }
    }
}
