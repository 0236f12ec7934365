//! # 알림 발송 큐
//!
//! 리뷰 상태 변경에 딸린 알림은 요청 처리와 분리된 백그라운드 작업으로 저장됩니다.
//! 큐 적재나 저장에 실패해도 호출자에게 전파하지 않고 로그만 남기며, 재시도는 하지 않습니다.
//!
//! ```text
//! change_status ──dispatch()──▶ [mpsc] ──▶ worker ──▶ NotificationService::send_notification
//! ```
//!
//! [`NotificationDispatcher::flush`]는 그 시점까지 적재된 명령이 모두 처리될 때까지 기다립니다.
//! 테스트와 종료 처리에서 사용합니다.

use std::sync::Arc;

use log::{debug, error, warn};
use tokio::sync::{mpsc, oneshot};

use crate::domain::entities::notifications::NewNotification;
use crate::services::notifications::NotificationService;

enum DispatchCommand {
    Deliver(NewNotification),
    Flush(oneshot::Sender<()>),
}

#[derive(Clone)]
pub struct NotificationDispatcher {
    sender: mpsc::UnboundedSender<DispatchCommand>,
}

impl NotificationDispatcher {
    /// 워커를 현재 tokio 런타임에 띄웁니다.
    pub fn spawn(service: Arc<NotificationService>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(run_worker(service, receiver));
        Self { sender }
    }

    /// 알림을 큐에 넣습니다. 실패는 로그로만 남습니다.
    pub fn dispatch(&self, notification: NewNotification) {
        let vendor_id = notification.vendor_id;

        if self
            .sender
            .send(DispatchCommand::Deliver(notification))
            .is_err()
        {
            error!("❌ 알림 큐가 닫혀 있어 알림을 버립니다: vendor={}", vendor_id);
        }
    }

    /// 이전에 적재된 알림 처리가 끝날 때까지 기다립니다.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();

        if self.sender.send(DispatchCommand::Flush(done)).is_err() {
            warn!("알림 워커가 이미 종료되었습니다");
            return;
        }
        let _ = wait.await;
    }
}

async fn run_worker(
    service: Arc<NotificationService>,
    mut receiver: mpsc::UnboundedReceiver<DispatchCommand>,
) {
    while let Some(command) = receiver.recv().await {
        match command {
            DispatchCommand::Deliver(notification) => {
                let vendor_id = notification.vendor_id;
                match service.send_notification(notification).await {
                    Ok(stored) => debug!("알림 발송 완료: vendor={} id={}", vendor_id, stored.id),
                    Err(e) => error!("❌ 알림 발송 실패: vendor={} error={}", vendor_id, e),
                }
            }
            DispatchCommand::Flush(done) => {
                let _ = done.send(());
            }
        }
    }

    debug!("알림 워커 종료");
}
