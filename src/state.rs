/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 *
 * API key の照合をしないので、今は持つものがない
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
