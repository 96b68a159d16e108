//! Allocate, inspect and release EIPs end to end.

use hcso_eip::application::EipApi;
use hcso_eip::application::services::{charge, lifecycle};
use hcso_eip::domain::{
    AllocateRequest, AssociationState, BillingType, EipError, EipStatus, InternetChargeType,
    ResourceKind,
};

use crate::helpers::{Call, Cloud, fetch};

fn request(bgp_type: &str) -> AllocateRequest {
    AllocateRequest {
        name: "web-frontend".to_string(),
        bandwidth_mbps: 10,
        charge_type: InternetChargeType::ByTraffic,
        bgp_type: bgp_type.to_string(),
        project_id: None,
    }
}

#[tokio::test]
async fn allocate_creates_postpaid_eip_with_dedicated_bandwidth() {
    let cloud = Cloud::new();

    let eip = lifecycle::allocate(&cloud, &request("5_bgp"))
        .await
        .expect("allocated");

    assert_eq!(eip.bandwidth(), 10);
    assert_eq!(eip.billing_type(), BillingType::Postpaid);
    assert_eq!(eip.bgp_type(), "5_bgp");
    assert_eq!(eip.bandwidth_share_type(), "PER");
    assert_eq!(eip.name(), "web-frontend");
    assert_eq!(eip.status(), EipStatus::Ready);
    assert_eq!(AssociationState::of(&eip), AssociationState::Unassociated);
    assert_eq!(eip.project_id(), None);
    assert_eq!(
        charge::internet_charge_type(&cloud, &eip).await,
        InternetChargeType::ByTraffic
    );
}

#[tokio::test]
async fn allocate_with_project_and_fixed_bandwidth() {
    let cloud = Cloud::new();
    let mut req = request("5_bgp");
    req.charge_type = InternetChargeType::ByBandwidth;
    req.project_id = Some("ep-42".to_string());

    let eip = lifecycle::allocate(&cloud, &req).await.expect("allocated");

    assert_eq!(eip.project_id(), Some("ep-42"));
    assert_eq!(
        charge::internet_charge_type(&cloud, &eip).await,
        InternetChargeType::ByBandwidth
    );
}

#[tokio::test]
async fn allocate_without_bgp_type_never_reaches_the_cloud() {
    let cloud = Cloud::new();

    let err = lifecycle::allocate(&cloud, &request(" "))
        .await
        .expect_err("expected Err");

    assert!(matches!(err, EipError::InvalidRequest(_)));
    assert!(cloud.calls().is_empty());
}

#[tokio::test]
async fn refresh_picks_up_out_of_band_changes() {
    let cloud = Cloud::new().with_eip("E1", "DOWN", None);
    let mut local = fetch(&cloud, "E1").await;
    cloud
        .update_eip_port("E1", Some("P7"))
        .await
        .expect("rebound elsewhere");

    lifecycle::refresh(&cloud, &mut local).await.expect("refresh");

    assert_eq!(local.port_id(), Some("P7"));
    assert_eq!(local.raw_status(), "ACTIVE");
    assert_eq!(AssociationState::of(&local), AssociationState::Associated);
}

#[tokio::test]
async fn delete_releases_the_address() {
    let cloud = Cloud::new().with_eip("E1", "DOWN", None);
    let eip = fetch(&cloud, "E1").await;

    lifecycle::delete(&cloud, eip).await.expect("deleted");

    assert_eq!(cloud.calls(), vec![Call::Delete("E1".to_string())]);
    let err = lifecycle::get(&cloud, "E1").await.expect_err("expected Err");
    assert!(matches!(
        err,
        EipError::NotFound {
            kind: ResourceKind::Eip,
            ..
        }
    ));
}

#[tokio::test]
async fn charge_type_defaults_to_traffic_when_bandwidth_is_gone() {
    let cloud = Cloud::new()
        .with_eip("E1", "DOWN", None)
        .without_bandwidth("bw-E1");
    let eip = fetch(&cloud, "E1").await;

    assert_eq!(
        charge::internet_charge_type(&cloud, &eip).await,
        InternetChargeType::ByTraffic
    );
}
