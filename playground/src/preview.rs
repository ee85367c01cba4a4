//! Dataset preview fetch with a synthetic fallback.
//!
//! The preview endpoint returns the first two principal components of a
//! dataset. Any failure, from a refused connection to a body whose arrays
//! disagree in length, is logged once and replaced by [`fallback_points`].

use std::sync::Arc;
use std::time::Duration;

use boostlab::synthetic::{fallback_points, DataPoint, FALLBACK_POINT_COUNT};
use boostlab::ui_model::Dataset;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::PreviewError;

/// Wire shape of `GET /datasets/{name}/pca`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PreviewPoints {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub target: Vec<f64>,
}

impl PreviewPoints {
    pub fn into_points(self) -> Result<Vec<DataPoint>, PreviewError> {
        let (nx, ny, nt) = (self.x.len(), self.y.len(), self.target.len());
        if nx != ny || nx != nt {
            return Err(PreviewError::LengthMismatch {
                x: nx,
                y: ny,
                target: nt,
            });
        }
        if nx == 0 {
            return Err(PreviewError::Decode("no points".to_string()));
        }
        Ok(self
            .x
            .into_iter()
            .zip(self.y)
            .zip(self.target)
            .map(|((x, y), target)| DataPoint { x, y, target })
            .collect())
    }
}

/// Anything that can produce preview points. Blocking; run it off the runtime.
pub trait PreviewSource: Send + Sync {
    fn fetch(&self, dataset: Dataset) -> Result<PreviewPoints, PreviewError>;
}

pub struct HttpPreviewSource {
    api_base: String,
    agent: ureq::Agent,
}

impl HttpPreviewSource {
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .build();
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn url_for(&self, dataset: Dataset) -> String {
        format!("{}/datasets/{}/pca", self.api_base, dataset.api_name())
    }
}

impl PreviewSource for HttpPreviewSource {
    fn fetch(&self, dataset: Dataset) -> Result<PreviewPoints, PreviewError> {
        let url = self.url_for(dataset);
        debug!("GET {}", url);
        let response = self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call()
            .map_err(|err| PreviewError::Http(err.to_string()))?;
        response
            .into_json::<PreviewPoints>()
            .map_err(|err| PreviewError::Decode(err.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOrigin {
    Api,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPoints {
    pub points: Vec<DataPoint>,
    pub origin: PointOrigin,
}

/// Fetch `dataset` once. Never fails and never retries.
pub async fn load_points(
    source: Arc<dyn PreviewSource>,
    dataset: Dataset,
    fallback_seed: u64,
) -> LoadedPoints {
    match fetch_points(source, dataset).await {
        Ok(points) => {
            info!("Loaded {} preview points for {}", points.len(), dataset.api_name());
            LoadedPoints {
                points,
                origin: PointOrigin::Api,
            }
        }
        Err(e) => {
            warn!(
                "Preview for {} unavailable ({}); using synthetic points",
                dataset.api_name(),
                e
            );
            LoadedPoints {
                points: fallback_points(fallback_seed, FALLBACK_POINT_COUNT),
                origin: PointOrigin::Fallback,
            }
        }
    }
}

async fn fetch_points(
    source: Arc<dyn PreviewSource>,
    dataset: Dataset,
) -> Result<Vec<DataPoint>, PreviewError> {
    let body = tokio::task::spawn_blocking(move || source.fetch(dataset)).await??;
    body.into_points()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}", addr)
    }

    fn json_response(body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        )
    }

    fn http(base: String) -> Arc<dyn PreviewSource> {
        Arc::new(HttpPreviewSource::new(base, Duration::from_secs(2)))
    }

    struct Failing;

    impl PreviewSource for Failing {
        fn fetch(&self, _: Dataset) -> Result<PreviewPoints, PreviewError> {
            Err(PreviewError::Http("boom".to_string()))
        }
    }

    #[test]
    fn url_joins_base_and_dataset() {
        let src = HttpPreviewSource::new("http://localhost:8000/", Duration::from_secs(1));
        assert_eq!(
            src.url_for(Dataset::BreastCancer),
            "http://localhost:8000/datasets/breast_cancer/pca"
        );
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let body = PreviewPoints {
            x: vec![0.1, 0.2],
            y: vec![0.3],
            target: vec![0.0, 1.0],
        };
        assert!(matches!(
            body.into_points(),
            Err(PreviewError::LengthMismatch { x: 2, y: 1, target: 2 })
        ));
    }

    #[tokio::test]
    async fn good_response_is_used_as_is() {
        let url = serve_once(json_response(
            r#"{"x":[0.1,0.9],"y":[0.2,0.8],"target":[0,1]}"#,
        ));
        let loaded = load_points(http(url), Dataset::Iris, 1).await;
        assert_eq!(loaded.origin, PointOrigin::Api);
        assert_eq!(
            loaded.points,
            vec![
                DataPoint { x: 0.1, y: 0.2, target: 0.0 },
                DataPoint { x: 0.9, y: 0.8, target: 1.0 },
            ]
        );
    }

    #[tokio::test]
    async fn server_error_falls_back() {
        let url = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\n\r\n".to_string(),
        );
        let loaded = load_points(http(url), Dataset::Wine, 7).await;
        assert_eq!(loaded.origin, PointOrigin::Fallback);
        assert_eq!(loaded.points, fallback_points(7, FALLBACK_POINT_COUNT));
    }

    #[tokio::test]
    async fn ragged_body_falls_back() {
        let url = serve_once(json_response(r#"{"x":[0.1],"y":[],"target":[1]}"#));
        let loaded = load_points(http(url), Dataset::Iris, 3).await;
        assert_eq!(loaded.origin, PointOrigin::Fallback);
        assert_eq!(loaded.points.len(), FALLBACK_POINT_COUNT);
    }

    #[tokio::test]
    async fn empty_body_falls_back() {
        let url = serve_once(json_response(r#"{"x":[],"y":[],"target":[]}"#));
        let loaded = load_points(http(url), Dataset::Iris, 4).await;
        assert_eq!(loaded.origin, PointOrigin::Fallback);
        assert_eq!(loaded.points, fallback_points(4, FALLBACK_POINT_COUNT));
    }

    #[test]
    fn empty_arrays_are_a_decode_error() {
        let body = PreviewPoints {
            x: vec![],
            y: vec![],
            target: vec![],
        };
        assert!(matches!(body.into_points(), Err(PreviewError::Decode(_))));
    }

    #[tokio::test]
    async fn refused_connection_falls_back() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let loaded = load_points(http(format!("http://{addr}")), Dataset::Housing, 5).await;
        assert_eq!(loaded.origin, PointOrigin::Fallback);
    }

    #[tokio::test]
    async fn any_source_error_falls_back() {
        let loaded = load_points(Arc::new(Failing), Dataset::Simulated, 9).await;
        assert_eq!(loaded.origin, PointOrigin::Fallback);
        assert_eq!(loaded.points, fallback_points(9, FALLBACK_POINT_COUNT));
    }
}
