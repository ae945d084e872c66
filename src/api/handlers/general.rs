//! General endpoints that don't touch the database.

/// Responds with a fixed banner so load balancers and humans can check the service is up.
pub async fn liveness() -> &'static str {
    "QR Inventory Management API is running"
}
