use groundwork_extern_contracts::delivery::{DeliveryApiService, DeliverySubmitResponse};
use groundwork_extern_impl::delivery::{DeliveryApiServiceConfig, DeliveryApiServiceImpl};
use groundwork_models::enquiry::{EnquiryRecord, RawEnquiry};
use tokio::net::TcpListener;
use url::Url;

const ACCESS_KEY: &str = "test-access-key";

#[tokio::test]
async fn submit_ok() {
    let sut = make_sut().await;
    let result = sut.submit(ACCESS_KEY, &enquiry()).await.unwrap();
    assert_eq!(
        result,
        DeliverySubmitResponse {
            success: true,
            message: "Email sent successfully!".into(),
        }
    );
}

#[tokio::test]
async fn submit_rejected_access_key() {
    let sut = make_sut().await;
    sut.submit("wrong-access-key", &enquiry()).await.unwrap_err();
}

#[tokio::test]
async fn submit_unreachable_endpoint() {
    let endpoint: Url = "http://127.0.0.1:1/submit".parse().unwrap();
    let sut = DeliveryApiServiceImpl::new(DeliveryApiServiceConfig::new(Some(endpoint)));
    sut.submit(ACCESS_KEY, &enquiry()).await.unwrap_err();
}

async fn make_sut() -> DeliveryApiServiceImpl {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(
            listener,
            groundwork_testing::delivery::router(ACCESS_KEY.into()),
        )
        .await
        .unwrap();
    });

    let endpoint: Url = format!("http://{addr}/submit").parse().unwrap();
    DeliveryApiServiceImpl::new(DeliveryApiServiceConfig::new(Some(endpoint)))
}

fn enquiry() -> EnquiryRecord {
    EnquiryRecord::validate(&RawEnquiry {
        name: "Jo Smith".into(),
        company: "".into(),
        email: "jo@example.com".into(),
        phone: "01234567890".into(),
        postcode: "PR1 1AA".into(),
        service: "Fencing".into(),
        message: "Need 200m of stock fencing replaced.".into(),
        honeypot: "".into(),
    })
    .unwrap()
}
