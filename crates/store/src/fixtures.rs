//! Bundled seed data.
//!
//! Used when a collection has no persisted snapshot yet, and by the
//! admin reset. Matches the studio's starter dataset: two clients, the
//! flagship wedding project, the owned gear fleet, the regular
//! freelancer bench, three published plans, and two example quotations.

use lenscraft_core::auth::Credential;
use lenscraft_core::billing::{Coupon, DiscountType, Invoice, InvoiceStatus};
use lenscraft_core::catalog::{Pillar, PlanSubItem, RateType, ServiceItem};
use lenscraft_core::client::{Client, ClientType};
use lenscraft_core::pipeline::ProjectStatus;
use lenscraft_core::project::{
    PaymentStatus, Project, ProjectCategory, ProjectInvoiceStatus, ProjectTier, ShootType,
    TimeSlot,
};
use lenscraft_core::quotation::{
    LineItem, LineItemSource, Quotation, QuotationStatus, QuotationTier,
};
use lenscraft_core::resources::{
    Asset, AssetCategory, AssetStatus, Freelancer, FreelancerRole, FreelancerStatus, SkillLevel,
};

pub fn clients() -> Vec<Client> {
    vec![
        Client {
            id: "1".to_string(),
            name: "Acme Corp".to_string(),
            client_type: ClientType::Corporate,
            email: "contact@acme.com".to_string(),
            phone: "+91 8811186951".to_string(),
            address: "Guwahati, Assam".to_string(),
            total_revenue: 45000,
            past_projects: 3,
        },
        Client {
            id: "2".to_string(),
            name: "Ritu & Sandeep".to_string(),
            client_type: ClientType::Individual,
            email: "ritu@wedding.in".to_string(),
            phone: "+91 9900011223".to_string(),
            address: "Shillong, Meghalaya".to_string(),
            total_revenue: 12500,
            past_projects: 1,
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![Project {
        id: "PRJ-2024-001".to_string(),
        title: "The Wedding of Ritu & Sandeep".to_string(),
        status: ProjectStatus::Shot,
        creation_date: "2023-10-01".to_string(),
        project_owner: "System Admin".to_string(),
        client_id: "2".to_string(),
        client_name: "Ritu & Sandeep".to_string(),
        client_type: ClientType::Individual,
        primary_contact: "Ritu Sharma".to_string(),
        phone: "+91 9900011223".to_string(),
        email: "ritu@wedding.in".to_string(),
        location: "Shillong, Meghalaya".to_string(),
        category: ProjectCategory::Wedding,
        tier: ProjectTier::Premium,
        service: Pillar::Photography,
        selected_package: Some("Classic Cinematic".to_string()),
        starting_price: Some(6850),
        shoot_type: ShootType::MultiDay,
        shoot_dates: vec!["2023-11-12".to_string(), "2023-11-13".to_string()],
        time_slot: TimeSlot::FullDay,
        delivery_deadline: "2023-12-15".to_string(),
        event_locations: "Pinewood Hotel, Shillong".to_string(),
        services_included: "Cinematic Photography, Raw Transfers, Drone Stills".to_string(),
        special_requirements: Some("Drone Aerials requested for ceremony".to_string()),
        quotation_id: Some("QT-101-99".to_string()),
        budget: 12500,
        invoice_status: ProjectInvoiceStatus::Paid,
        payment_status: PaymentStatus::Paid,
        advance_received: true,
        outstanding_amount: 0,
        internal_notes: Some("VIP wedding, ensure Rahul is lead".to_string()),
        created_by: "System Admin".to_string(),
        last_modified_by: "System Admin".to_string(),
        last_modified_date: "2023-11-14".to_string(),
    }]
}

pub fn assets() -> Vec<Asset> {
    let camera = |id: &str, name: &str, cost, rental_rate, status, tag: &str| Asset {
        id: id.to_string(),
        name: name.to_string(),
        category: AssetCategory::Camera,
        status,
        cost,
        rental_rate,
        variants: None,
        project_types: Some(vec![Pillar::Photography]),
        suitable_categories: Some(vec![tag.to_string()]),
    };
    vec![
        camera("a1", "Sony 6000", 45000, 1500, AssetStatus::Available, "Crop sensor camera"),
        camera("a2", "Canon M50", 55000, 2100, AssetStatus::Available, "Crop sensor camera"),
        Asset {
            project_types: Some(vec![Pillar::Photography, Pillar::Videography]),
            ..camera("a3", "Sony SII", 180000, 3800, AssetStatus::InUse, "Full sensor camera")
        },
        Asset {
            id: "e1".to_string(),
            name: "Ronin RC Gimbal".to_string(),
            category: AssetCategory::Accessory,
            status: AssetStatus::Available,
            cost: 35000,
            rental_rate: 900,
            variants: None,
            project_types: Some(vec![Pillar::Videography]),
            suitable_categories: Some(vec!["Stabilization".to_string()]),
        },
        Asset {
            id: "e2".to_string(),
            name: "Godox LC500 Light Stick".to_string(),
            category: AssetCategory::Light,
            status: AssetStatus::Available,
            cost: 15000,
            rental_rate: 250,
            variants: None,
            project_types: Some(vec![Pillar::Photography, Pillar::Videography]),
            suitable_categories: Some(vec!["RGB Lighting".to_string()]),
        },
    ]
}

pub fn freelancers() -> Vec<Freelancer> {
    let photographer = |id: &str, name: &str, level, rate_per_day, rating: f32, tag: &str| {
        Freelancer {
            id: id.to_string(),
            name: name.to_string(),
            role: FreelancerRole::Photographer,
            level,
            rate_per_day,
            rating,
            status: FreelancerStatus::Available,
            verified: true,
            variants: None,
            suitable_categories: Some(vec![tag.to_string()]),
            expertise: Some(vec![Pillar::Photography]),
        }
    };
    vec![
        photographer("f1", "Rahul Sinha", SkillLevel::Mid, 2000, 4.8, "Traditional Photography"),
        photographer("f2", "Samrat Sinha", SkillLevel::Mid, 2300, 4.9, "Classic Wedding"),
        photographer("f3", "Rupom Sinha", SkillLevel::Mid, 2000, 4.7, "Traditional Photography"),
        photographer("f4", "Shiv Narayan Das", SkillLevel::Senior, 1900, 5.0, "Expert Traditional"),
    ]
}

pub fn services() -> Vec<ServiceItem> {
    let sub = |id: &str, name: &str, price, is_mandatory| PlanSubItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        is_mandatory,
    };
    vec![
        ServiceItem {
            id: "s1".to_string(),
            pillar: Pillar::Photography,
            category: "Wedding".to_string(),
            plan_name: "Traditional Package".to_string(),
            price: 5200,
            rate_type: RateType::Fixed,
            description: "Entry-level traditional coverage.".to_string(),
            items: vec![
                sub("i1", "Single Photographer (Crop Sensor)", 3500, true),
                sub("i2", "Basic Retouching (50 Photos)", 1000, true),
                sub("i3", "Online Delivery Hub", 700, true),
                sub("i4", "Printed Hard-copy Album", 4000, false),
            ],
            portfolio_link: None,
            theme_index: Some(1),
        },
        ServiceItem {
            id: "s2".to_string(),
            pillar: Pillar::Photography,
            category: "Wedding".to_string(),
            plan_name: "Classic Cinematic".to_string(),
            price: 6850,
            rate_type: RateType::Fixed,
            description: "High-end cinematic wedding stills.".to_string(),
            items: vec![
                sub("i5", "Premium Photographer (Full Sensor)", 4850, true),
                sub("i6", "Professional Editing (100 Photos)", 2000, true),
                sub("i7", "Unlimited Raw Transfers", 0, true),
                sub("i8", "Drone Aerial Shots", 3000, false),
            ],
            portfolio_link: None,
            theme_index: Some(0),
        },
        ServiceItem {
            id: "s3".to_string(),
            pillar: Pillar::Videography,
            category: "Event".to_string(),
            plan_name: "Recap Protocol".to_string(),
            price: 3000,
            rate_type: RateType::Fixed,
            description: "Standard event recap video.".to_string(),
            items: vec![
                sub("i9", "Cinematographer (3 Hours)", 2000, true),
                sub("i10", "Video Editing (30 Mins)", 1000, true),
            ],
            portfolio_link: None,
            theme_index: Some(2),
        },
    ]
}

pub fn quotations() -> Vec<Quotation> {
    let item = |description: &str, price, source| LineItem {
        description: description.to_string(),
        quantity: 1,
        price,
        source,
    };
    vec![
        Quotation {
            id: "QT-2024-881".to_string(),
            client_id: "1".to_string(),
            client_name: "Acme Corp".to_string(),
            date: "2024-03-15".to_string(),
            start_date: "2024-04-10".to_string(),
            end_date: "2024-04-10".to_string(),
            expiry_date: "2024-03-29".to_string(),
            project_type: Pillar::Videography,
            tier: QuotationTier::Premium,
            items: vec![
                item("Recap Protocol", 3000, LineItemSource::Catalog),
                item("Drone Aerial Coverage", 2500, LineItemSource::Resource),
                item("4K Cinema Delivery", 1500, LineItemSource::Manual),
            ],
            total_amount: 7000,
            status: QuotationStatus::Sent,
        },
        Quotation {
            id: "QT-2024-912".to_string(),
            client_id: "2".to_string(),
            client_name: "Ritu & Sandeep".to_string(),
            date: "2023-11-01".to_string(),
            start_date: "2023-11-12".to_string(),
            end_date: "2023-11-13".to_string(),
            expiry_date: "2023-11-15".to_string(),
            project_type: Pillar::Photography,
            tier: QuotationTier::Premium,
            items: vec![
                item("Classic Cinematic", 6850, LineItemSource::Catalog),
                item("Luxury Leather Album", 4000, LineItemSource::Manual),
                item("Additional Lead Photographer", 1650, LineItemSource::Resource),
            ],
            total_amount: 12500,
            status: QuotationStatus::Accepted,
        },
    ]
}

pub fn invoices() -> Vec<Invoice> {
    vec![Invoice {
        id: "INV-OEVG-001".to_string(),
        client_name: "Ritu & Sandeep".to_string(),
        amount: 12500,
        date: "2023-11-15".to_string(),
        status: InvoiceStatus::Paid,
    }]
}

pub fn coupons() -> Vec<Coupon> {
    vec![
        Coupon {
            code: "WINTER20".to_string(),
            discount_type: DiscountType::Percentage,
            value: 20,
            expiry: "2024-12-31".to_string(),
        },
        Coupon {
            code: "FIRST500".to_string(),
            discount_type: DiscountType::Fixed,
            value: 500,
            expiry: "2025-01-01".to_string(),
        },
    ]
}

/// The fixed login allow-list.
pub fn allow_list() -> Vec<Credential> {
    let entry = |username: &str, password: &str, name: &str, role: &str| Credential {
        username: username.to_string(),
        password: password.to_string(),
        name: name.to_string(),
        role: role.to_string(),
    };
    vec![
        entry("SystemAdmin", "Admin00", "System Admin", "Root Admin"),
        entry("creative", "password", "Creative Lead", "Director"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use lenscraft_core::quotation::line_items_total;

    #[test]
    fn seeded_quotation_totals_match_their_items() {
        for quotation in quotations() {
            assert_eq!(quotation.total_amount, line_items_total(&quotation.items));
        }
    }

    #[test]
    fn seeded_project_references_a_seeded_client() {
        let client_ids: Vec<_> = clients().into_iter().map(|c| c.id).collect();
        for project in projects() {
            assert!(client_ids.contains(&project.client_id));
        }
    }
}
