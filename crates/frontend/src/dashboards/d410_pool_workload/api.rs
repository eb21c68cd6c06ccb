use contracts::dashboards::d410_pool_workload::{PoolWorkloadRequest, PoolWorkloadResponse};
use gloo_net::http::Request;

const API_BASE: &str = "/api/pool-workload";

/// Получить снапшот доступности бассейна за рабочий диапазон часов
pub async fn get_pool_workload(
    request: &PoolWorkloadRequest,
) -> Result<PoolWorkloadResponse, String> {
    let query =
        serde_qs::to_string(request).map_err(|e| format!("Invalid request params: {}", e))?;
    let url = format!("{}?{}", API_BASE, query);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: PoolWorkloadResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
