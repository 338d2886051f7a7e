//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! loop {
//!     app.refresh_panels()                            // 从控制器拉取最新面板快照
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询输入，最长等待 100ms
//!         let msg = handle_event(event , &app);       // 将原始事件翻译为消息
//!         update::update(&mut app , msg)              // 更新状态
//!     }
//! }
//!
//! 面板的检查序列在后端运行时里异步执行，并把结果写进各自控制器的
//! 显示状态；主循环每一轮通过 `refresh_panels` 读取快照，因此网络
//! 调用从不阻塞 UI。

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 拉取面板显示快照
        app.refresh_panels();

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
