#[macro_export]
macro_rules! put {
    ($http:expr, $url:expr, $token:expr, $body:expr) => {{
        use $crate::http::{Headers, ResponseHandler};

        $http
            .put($url)
            .json_headers($token)
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! get {
    ($http:expr, $url:expr, $token:expr) => {{
        use $crate::http::{Headers, ResponseHandler};

        $http
            .get($url)
            .default_headers($token)
            .send()
            .await
            .handle()
            .await
    }};
}
