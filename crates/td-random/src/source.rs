//! The random source: remote true-random requests with a local fallback.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::config::SourceConfig;
use crate::error::RequestResult;
use crate::pseudo;
use crate::quota::Quota;
use crate::request::{Format, RandomRequest, RequestKind};
use crate::result::{Origin, RandomResult, Status, Value};
use crate::transport::{OfflineTransport, ReqwestTransport, Transport, TransportError};
use crate::url;

/// Alert attached to results produced locally because the quota ran out.
pub const FALLBACK_ALERT: &str =
    "Error: random.org is unable to fulfill the request, defaulting to pseudo random.";

/// Produces random integers, sequences, and strings.
///
/// Each call is a single blocking attempt. The source owns its transport
/// and generator, so every request takes `&mut self`.
pub struct RandomSource {
    config: SourceConfig,
    transport: Box<dyn Transport>,
    rng: StdRng,
}

impl RandomSource {
    /// Create a source from `config`, using reqwest when online.
    pub fn new(config: SourceConfig) -> Result<Self, TransportError> {
        let transport: Box<dyn Transport> = if config.online {
            Box::new(ReqwestTransport::new(&config.user_agent)?)
        } else {
            Box::new(OfflineTransport)
        };
        Ok(Self::with_transport(config, transport))
    }

    /// Create a source that fetches through `transport`.
    pub fn with_transport(config: SourceConfig, transport: Box<dyn Transport>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            transport,
            rng,
        }
    }

    /// The configuration this source was built with.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Ask the service how many bytes remain.
    ///
    /// Any failure (network, non-200, unparseable body) reads as
    /// [`Quota::UNKNOWN`], which counts as exhausted.
    pub fn fetch_quota(&mut self) -> Quota {
        let quota_url = url::quota_url(&self.config.base_url);
        match self.transport.get(&quota_url) {
            Ok(resp) if resp.status == 200 => Quota::parse(&resp.body).unwrap_or_else(|| {
                warn!(body = %resp.body.trim(), "unparseable quota body");
                Quota::UNKNOWN
            }),
            Ok(resp) => {
                warn!(status = resp.status, "quota check refused");
                Quota::UNKNOWN
            }
            Err(e) => {
                warn!(error = %e, "quota check failed");
                Quota::UNKNOWN
            }
        }
    }

    /// Request values from the service, falling back to the local
    /// generator when the quota is exhausted or unknown.
    ///
    /// Invalid requests fail before any network call. Remote failures are
    /// reported in the returned result, never as `Err`.
    pub fn request_true_random(&mut self, req: &RandomRequest) -> RequestResult<RandomResult> {
        req.validate()?;

        let quota = self.fetch_quota();
        if quota.is_exhausted() {
            info!(%quota, kind = %req.kind, "quota exhausted, generating locally");
            let mut result = self.generate_locally(req);
            result.status = Status::QuotaFallback;
            result.alert = Some(FALLBACK_ALERT.to_string());
            return Ok(result);
        }

        let request_url = url::request_url(&self.config.base_url, req);
        debug!(%quota, url = %request_url, "requesting true random values");
        let resp = match self.transport.get(&request_url) {
            Ok(resp) => resp,
            Err(e) => return Ok(RandomResult::failure(Status::Unreachable, e.to_string())),
        };

        if resp.status != 200 {
            warn!(status = resp.status, body = %resp.body.trim(), "service refused request");
            let body = resp.body.trim();
            let alert = if body.is_empty() {
                format!("random.org answered HTTP {} with an empty body", resp.status)
            } else {
                body.to_string()
            };
            return Ok(RandomResult::failure(Status::RemoteError(resp.status), alert));
        }

        Ok(match parse_body(req, &resp.body) {
            Ok(values) => RandomResult::success(values, Origin::Remote),
            Err(reason) => {
                warn!(%reason, "malformed response body");
                RandomResult::failure(Status::Malformed, reason)
            }
        })
    }

    /// Generate values locally; never touches the network.
    pub fn request_pseudo_random(&mut self, req: &RandomRequest) -> RequestResult<RandomResult> {
        req.validate()?;
        Ok(self.generate_locally(req))
    }

    /// Use the service when configured online, the local generator otherwise.
    pub fn request(&mut self, req: &RandomRequest) -> RequestResult<RandomResult> {
        if self.config.online {
            self.request_true_random(req)
        } else {
            self.request_pseudo_random(req)
        }
    }

    fn generate_locally(&mut self, req: &RandomRequest) -> RandomResult {
        RandomResult::success(pseudo::generate(req, &mut self.rng), Origin::Local)
    }
}

/// Number of values a well-formed plain response carries.
fn expected_len(req: &RandomRequest) -> usize {
    match req.kind {
        RequestKind::Integers | RequestKind::Strings => req.num as usize,
        RequestKind::Sequences => (req.max - req.min + 1) as usize,
    }
}

/// Split a plain-text body into values of the requested kind.
fn parse_body(req: &RandomRequest, body: &str) -> Result<Vec<Value>, String> {
    if req.format == Format::Html {
        return Ok(vec![Value::Text(body.to_string())]);
    }

    let radix = match req.kind {
        RequestKind::Integers => req.base.radix(),
        _ => 10,
    };
    let values = body
        .split_whitespace()
        .map(|token| match req.kind {
            RequestKind::Strings => Ok(Value::Text(token.to_string())),
            _ => i64::from_str_radix(token, radix)
                .map(Value::Integer)
                .map_err(|e| format!("cannot read {token:?} as a base-{radix} integer: {e}")),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let expected = expected_len(req);
    if values.len() != expected {
        return Err(format!(
            "expected {expected} values, response held {}",
            values.len()
        ));
    }
    check_values(req, &values)?;
    Ok(values)
}

/// Reject values the request could not have produced.
fn check_values(req: &RandomRequest, values: &[Value]) -> Result<(), String> {
    match req.kind {
        RequestKind::Integers => {
            let range = req.min..=req.max;
            let stray = values
                .iter()
                .find(|v| !v.as_integer().is_some_and(|n| range.contains(&n)));
            match stray {
                Some(v) => Err(format!("{v} lies outside [{}, {}]", req.min, req.max)),
                None => Ok(()),
            }
        }
        RequestKind::Sequences => {
            let mut sorted: Vec<i64> = values.iter().filter_map(Value::as_integer).collect();
            sorted.sort_unstable();
            if sorted.iter().copied().eq(req.min..=req.max) {
                Ok(())
            } else {
                Err(format!(
                    "sequence is not a permutation of [{}, {}]",
                    req.min, req.max
                ))
            }
        }
        RequestKind::Strings => {
            let alphabet = req.alphabet();
            let len = req.len as usize;
            for text in values.iter().filter_map(Value::as_text) {
                if text.chars().count() != len {
                    return Err(format!("{text:?} is not {len} characters long"));
                }
                if let Some(c) = text.chars().find(|c| !alphabet.contains(*c)) {
                    return Err(format!("{text:?} holds {c:?}, outside the alphabet"));
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::*;
    use crate::error::RequestError;
    use crate::request::Base;
    use crate::transport::HttpResponse;

    /// Replays canned responses and records every URL fetched.
    struct FakeTransport {
        responses: VecDeque<Result<HttpResponse, TransportError>>,
        fetched: Rc<RefCell<Vec<String>>>,
    }

    impl Transport for FakeTransport {
        fn get(&mut self, url: &str) -> Result<HttpResponse, TransportError> {
            self.fetched.borrow_mut().push(url.to_string());
            self.responses
                .pop_front()
                .unwrap_or_else(|| Err(TransportError("no canned response".into())))
        }
    }

    fn ok(body: &str) -> Result<HttpResponse, TransportError> {
        Ok(HttpResponse {
            status: 200,
            body: body.to_string(),
        })
    }

    fn status(code: u16, body: &str) -> Result<HttpResponse, TransportError> {
        Ok(HttpResponse {
            status: code,
            body: body.to_string(),
        })
    }

    fn source(
        responses: Vec<Result<HttpResponse, TransportError>>,
    ) -> (RandomSource, Rc<RefCell<Vec<String>>>) {
        let fetched = Rc::new(RefCell::new(Vec::new()));
        let transport = FakeTransport {
            responses: responses.into(),
            fetched: Rc::clone(&fetched),
        };
        let config = SourceConfig::default()
            .with_base_url("http://rng.test")
            .with_seed(42);
        (RandomSource::with_transport(config, Box::new(transport)), fetched)
    }

    #[test]
    fn quota_parsed_from_body() {
        let (mut src, fetched) = source(vec![ok("998877\n")]);
        assert_eq!(src.fetch_quota(), Quota(998_877));
        assert_eq!(fetched.borrow()[0], "http://rng.test/quota/?format=plain");
    }

    #[test]
    fn quota_failures_read_as_unknown() {
        let (mut src, _) = source(vec![
            status(503, "busy"),
            ok("not a number"),
            Err(TransportError("dns".into())),
        ]);
        assert_eq!(src.fetch_quota(), Quota::UNKNOWN);
        assert_eq!(src.fetch_quota(), Quota::UNKNOWN);
        assert_eq!(src.fetch_quota(), Quota::UNKNOWN);
    }

    #[test]
    fn remote_integers() {
        let (mut src, fetched) = source(vec![ok("5000"), ok("3\n6\n1\n")]);
        let result = src
            .request_true_random(&RandomRequest::integers(3, 1, 6))
            .unwrap();
        assert_eq!(result.status, Status::Success);
        assert_eq!(result.origin, Origin::Remote);
        assert_eq!(result.integers(), Some(vec![3, 6, 1]));
        assert_eq!(result.alert, None);
        assert_eq!(
            fetched.borrow()[1],
            "http://rng.test/integers/?num=3&min=1&max=6&col=1&base=10&format=plain&rnd=new"
        );
    }

    #[test]
    fn remote_integers_in_hex_columns() {
        let (mut src, _) = source(vec![ok("5000"), ok("ff\t-a\n10\n")]);
        let req = RandomRequest::integers(3, -16, 255)
            .with_base(Base::Hexadecimal)
            .with_columns(2);
        let result = src.request_true_random(&req).unwrap();
        assert_eq!(result.integers(), Some(vec![255, -10, 16]));
    }

    #[test]
    fn remote_strings() {
        let (mut src, _) = source(vec![ok("12"), ok("aZ09\nQQqq\n")]);
        let result = src
            .request_true_random(&RandomRequest::strings(2, 4))
            .unwrap();
        assert_eq!(
            result.values,
            vec![Value::Text("aZ09".into()), Value::Text("QQqq".into())]
        );
    }

    #[test]
    fn negative_quota_falls_back_with_same_shape() {
        let req = RandomRequest::integers(24, 1, 6);
        let (mut remote, fetched) = source(vec![ok("-1024")]);
        let fallback = remote.request_true_random(&req).unwrap();

        let (mut local, _) = source(vec![]);
        let direct = local.request_pseudo_random(&req).unwrap();

        assert_eq!(fallback.status, Status::QuotaFallback);
        assert_eq!(fallback.status.code(), 601);
        assert_eq!(fallback.alert.as_deref(), Some(FALLBACK_ALERT));
        assert_eq!(fallback.origin, Origin::Local);
        assert_eq!(fallback.values.len(), direct.values.len());
        assert_eq!(direct.status, Status::Success);
        assert_eq!(direct.alert, None);
        // Only the quota endpoint was contacted.
        assert_eq!(fetched.borrow().len(), 1);
    }

    #[test]
    fn unreachable_quota_falls_back() {
        let (mut src, _) = source(vec![Err(TransportError("connection refused".into()))]);
        let result = src
            .request_true_random(&RandomRequest::sequence(1, 10))
            .unwrap();
        assert_eq!(result.status, Status::QuotaFallback);
        let mut values = result.integers().unwrap();
        values.sort_unstable();
        assert_eq!(values, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn non_200_yields_empty_values_and_body_as_alert() {
        let body = "Error: The maximum value must be greater than or equal to the minimum value\n";
        let (mut src, _) = source(vec![ok("1000"), status(503, body)]);
        let result = src
            .request_true_random(&RandomRequest::integers(1, 1, 6))
            .unwrap();
        assert!(result.values.is_empty());
        assert_eq!(result.status, Status::RemoteError(503));
        assert_eq!(result.alert.as_deref(), Some(body.trim()));
    }

    #[test]
    fn non_200_with_blank_body_still_alerts() {
        let (mut src, _) = source(vec![ok("1000"), status(503, "\n")]);
        let result = src
            .request_true_random(&RandomRequest::integers(1, 1, 6))
            .unwrap();
        assert!(result.values.is_empty());
        assert_eq!(result.status, Status::RemoteError(503));
        let alert = result.alert.unwrap();
        assert!(!alert.is_empty());
        assert!(alert.contains("503"));
    }

    #[test]
    fn transport_failure_after_quota() {
        let (mut src, _) = source(vec![ok("1000"), Err(TransportError("reset".into()))]);
        let result = src
            .request_true_random(&RandomRequest::integers(1, 1, 6))
            .unwrap();
        assert!(result.is_empty());
        assert_eq!(result.status, Status::Unreachable);
        assert_eq!(result.alert.as_deref(), Some("reset"));
    }

    #[test]
    fn malformed_body() {
        let (mut src, _) = source(vec![ok("1000"), ok("4\nfive\n")]);
        let result = src
            .request_true_random(&RandomRequest::integers(2, 1, 6))
            .unwrap();
        assert_eq!(result.status, Status::Malformed);
        assert!(result.is_empty());
        assert!(result.alert.unwrap().contains("five"));
    }

    #[test]
    fn short_body_is_malformed() {
        let (mut src, _) = source(vec![ok("1000"), ok("4\n")]);
        let result = src
            .request_true_random(&RandomRequest::integers(2, 1, 6))
            .unwrap();
        assert_eq!(result.status, Status::Malformed);
    }

    #[test]
    fn integer_out_of_range_is_malformed() {
        let (mut src, _) = source(vec![ok("1000"), ok("99\n")]);
        let result = src
            .request_true_random(&RandomRequest::integers(1, 1, 6))
            .unwrap();
        assert_eq!(result.status, Status::Malformed);
        assert!(result.is_empty());
        assert!(result.alert.unwrap().contains("99"));
    }

    #[test]
    fn sequence_must_be_a_permutation() {
        let (mut src, _) = source(vec![
            ok("1000"),
            ok("3\n1\n2\n"),
            ok("1000"),
            ok("1\n1\n3\n"),
        ]);
        let req = RandomRequest::sequence(1, 3);
        let good = src.request_true_random(&req).unwrap();
        assert_eq!(good.status, Status::Success);
        assert_eq!(good.integers(), Some(vec![3, 1, 2]));

        let repeated = src.request_true_random(&req).unwrap();
        assert_eq!(repeated.status, Status::Malformed);
        assert!(repeated.is_empty());
    }

    #[test]
    fn strings_checked_against_length_and_alphabet() {
        let req = RandomRequest::strings(1, 4).with_alphabet(true, false, false);
        let (mut src, _) = source(vec![ok("1000"), ok("12a4\n"), ok("1000"), ok("123\n")]);

        let foreign = src.request_true_random(&req).unwrap();
        assert_eq!(foreign.status, Status::Malformed);
        assert!(foreign.alert.unwrap().contains("'a'"));

        let short = src.request_true_random(&req).unwrap();
        assert_eq!(short.status, Status::Malformed);
        assert!(short.is_empty());
    }

    #[test]
    fn html_body_kept_whole() {
        let (mut src, _) = source(vec![ok("1000"), ok("<html><p>4</p></html>")]);
        let req = RandomRequest::integers(1, 1, 6).with_format(Format::Html);
        let result = src.request_true_random(&req).unwrap();
        assert_eq!(result.values, vec![Value::Text("<html><p>4</p></html>".into())]);
    }

    #[test]
    fn invalid_request_fails_before_network() {
        let (mut src, fetched) = source(vec![ok("1000")]);
        let err = src
            .request_true_random(&RandomRequest::strings(1, 5).with_alphabet(false, false, false))
            .unwrap_err();
        assert_eq!(err, RequestError::EmptyAlphabet);
        assert!(fetched.borrow().is_empty());

        assert!(src.request_pseudo_random(&RandomRequest::integers(1, 9, 2)).is_err());
    }

    #[test]
    fn request_dispatches_on_config() {
        let transport = FakeTransport {
            responses: VecDeque::new(),
            fetched: Rc::new(RefCell::new(Vec::new())),
        };
        let fetched = Rc::clone(&transport.fetched);
        let config = SourceConfig::default().with_seed(1).offline();
        let mut src = RandomSource::with_transport(config, Box::new(transport));
        let result = src.request(&RandomRequest::integers(4, 1, 20)).unwrap();
        assert_eq!(result.status, Status::Success);
        assert_eq!(result.origin, Origin::Local);
        assert!(fetched.borrow().is_empty());
    }

    #[test]
    fn seeded_sources_agree() {
        let req = RandomRequest::strings(3, 10);
        let (mut a, _) = source(vec![]);
        let (mut b, _) = source(vec![]);
        assert_eq!(
            a.request_pseudo_random(&req).unwrap(),
            b.request_pseudo_random(&req).unwrap()
        );
    }
}
