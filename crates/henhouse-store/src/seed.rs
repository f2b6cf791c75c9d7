// SPDX-License-Identifier: Apache-2.0

//! Demo rows the store starts with. Ids are fixed so the dashboard always
//! has something to render on a fresh process.

use henhouse_model::{
    Client, EggProduction, Employee, FeedConsumption, FeedItem, HealthRecord,
    NotificationSettings, Payment, PoultryBatch, PreferenceSettings, ProfileSettings, Reminder,
    Role, SecuritySettings, User, UserSettings,
};

use crate::hash_password;

pub(crate) fn batches(now: &str) -> Vec<PoultryBatch> {
    vec![
        PoultryBatch {
            id: 1,
            bird_type: "Chicken".to_string(),
            breed: "Rhode Island Red".to_string(),
            current_count: 500,
            age_weeks: 12,
            purchase_date: "2024-01-15".to_string(),
            purchase_price: 2500.0,
            mortality_count: 5,
            created_at: now.to_string(),
        },
        PoultryBatch {
            id: 2,
            bird_type: "Chicken".to_string(),
            breed: "Leghorn".to_string(),
            current_count: 300,
            age_weeks: 8,
            purchase_date: "2024-02-01".to_string(),
            purchase_price: 1800.0,
            mortality_count: 2,
            created_at: now.to_string(),
        },
    ]
}

pub(crate) fn feed_items(now: &str) -> Vec<FeedItem> {
    vec![
        FeedItem {
            id: 1,
            feed_type: "Layer Feed".to_string(),
            quantity_kg: 1000.0,
            unit_price: 0.5,
            supplier: "Farm Supply Co".to_string(),
            purchase_date: "2024-01-01".to_string(),
            expiry_date: "2024-06-01".to_string(),
            created_at: now.to_string(),
        },
        FeedItem {
            id: 2,
            feed_type: "Starter Feed".to_string(),
            quantity_kg: 500.0,
            unit_price: 0.6,
            supplier: "Farm Supply Co".to_string(),
            purchase_date: "2024-01-01".to_string(),
            expiry_date: "2024-06-01".to_string(),
            created_at: now.to_string(),
        },
    ]
}

pub(crate) fn feed_consumption(now: &str) -> Vec<FeedConsumption> {
    vec![FeedConsumption {
        id: 1,
        feed_id: 1,
        consumption_date: "2024-01-15".to_string(),
        quantity_used: 50.0,
        notes: "Daily feeding".to_string(),
        feed_type: "Layer Feed".to_string(),
        created_at: now.to_string(),
    }]
}

pub(crate) fn health_records(now: &str) -> Vec<HealthRecord> {
    vec![
        HealthRecord {
            id: 1,
            treatment_type: "vaccination".to_string(),
            treatment_name: "Newcastle Disease Vaccine".to_string(),
            treatment_date: "2024-01-10".to_string(),
            next_due_date: Some("2024-04-10".to_string()),
            notes: "All birds vaccinated successfully".to_string(),
            cost: 150.0,
            created_at: now.to_string(),
        },
        HealthRecord {
            id: 2,
            treatment_type: "medication".to_string(),
            treatment_name: "Antibiotic Treatment".to_string(),
            treatment_date: "2024-01-05".to_string(),
            next_due_date: None,
            notes: "Treatment for respiratory infection".to_string(),
            cost: 75.0,
            created_at: now.to_string(),
        },
    ]
}

pub(crate) fn productions(now: &str) -> Vec<EggProduction> {
    vec![
        EggProduction {
            id: 1,
            production_date: "2024-01-15".to_string(),
            eggs_collected: 450,
            broken_eggs: 5,
            notes: "Good production day".to_string(),
            created_at: now.to_string(),
        },
        EggProduction {
            id: 2,
            production_date: "2024-01-14".to_string(),
            eggs_collected: 420,
            broken_eggs: 3,
            notes: "Normal production".to_string(),
            created_at: now.to_string(),
        },
    ]
}

pub(crate) fn employees(now: &str) -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            employee_name: "Mike Johnson".to_string(),
            position: "Farm Worker".to_string(),
            phone: "+1234567892".to_string(),
            email: "mike@farm.com".to_string(),
            hire_date: "2024-01-01".to_string(),
            salary: 2000.0,
            payment_frequency: "monthly".to_string(),
            is_active: true,
            created_at: now.to_string(),
        },
        Employee {
            id: 2,
            employee_name: "Sarah Wilson".to_string(),
            position: "Veterinary Assistant".to_string(),
            phone: "+1234567893".to_string(),
            email: "sarah@farm.com".to_string(),
            hire_date: "2024-01-15".to_string(),
            salary: 2500.0,
            payment_frequency: "monthly".to_string(),
            is_active: true,
            created_at: now.to_string(),
        },
    ]
}

pub(crate) fn payments(now: &str) -> Vec<Payment> {
    vec![Payment {
        id: 1,
        employee_id: 1,
        employee_name: "Mike Johnson".to_string(),
        payment_date: "2024-01-31".to_string(),
        amount: 2000.0,
        payment_period_start: "2024-01-01".to_string(),
        payment_period_end: "2024-01-31".to_string(),
        payment_method: "bank_transfer".to_string(),
        notes: "January salary".to_string(),
        created_at: now.to_string(),
    }]
}

pub(crate) fn clients(now: &str) -> Vec<Client> {
    vec![
        Client {
            id: 1,
            client_name: "Local Grocery Store".to_string(),
            contact_person: "Manager".to_string(),
            phone: "+1234567894".to_string(),
            email: "manager@grocery.com".to_string(),
            address: "123 Main St, City, State".to_string(),
            client_type: "business".to_string(),
            credit_limit: 5000.0,
            outstanding_balance: 1200.0,
            created_at: now.to_string(),
        },
        Client {
            id: 2,
            client_name: "Restaurant Chain".to_string(),
            contact_person: "Purchasing Manager".to_string(),
            phone: "+1234567895".to_string(),
            email: "purchasing@restaurant.com".to_string(),
            address: "456 Business Ave, City, State".to_string(),
            client_type: "business".to_string(),
            credit_limit: 10000.0,
            outstanding_balance: 0.0,
            created_at: now.to_string(),
        },
    ]
}

pub(crate) fn reminders(now: &str) -> Vec<Reminder> {
    vec![
        Reminder {
            id: 1,
            title: "Newcastle Disease Vaccination".to_string(),
            description: "Vaccinate all birds against Newcastle disease".to_string(),
            reminder_date: "2024-02-15".to_string(),
            reminder_type: "vaccination".to_string(),
            is_completed: false,
            created_at: now.to_string(),
        },
        Reminder {
            id: 2,
            title: "Feed Stock Check".to_string(),
            description: "Check and reorder feed supplies".to_string(),
            reminder_date: "2024-02-10".to_string(),
            reminder_type: "feeding".to_string(),
            is_completed: true,
            created_at: now.to_string(),
        },
    ]
}

pub(crate) fn users(now: &str) -> Vec<User> {
    vec![
        User {
            id: 1,
            username: "admin".to_string(),
            email: "admin@poultrymanager.com".to_string(),
            password_hash: hash_password("admin"),
            first_name: "System".to_string(),
            last_name: "Administrator".to_string(),
            phone: None,
            role: Role::Admin,
            is_active: true,
            created_at: now.to_string(),
        },
        User {
            id: 2,
            username: "farmer1".to_string(),
            email: "farmer@example.com".to_string(),
            password_hash: hash_password("farmer"),
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            phone: None,
            role: Role::Farmer,
            is_active: true,
            created_at: now.to_string(),
        },
    ]
}

pub(crate) fn settings() -> UserSettings {
    UserSettings {
        profile: ProfileSettings {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            email: "farmer@example.com".to_string(),
            phone: "+1234567891".to_string(),
            farm_name: "Green Valley Poultry Farm".to_string(),
            location: "123 Farm Road, Rural County".to_string(),
        },
        notifications: NotificationSettings {
            email_notifications: true,
            sms_notifications: false,
            reminder_alerts: true,
            health_alerts: true,
            production_alerts: true,
            low_stock_alerts: true,
        },
        preferences: PreferenceSettings {
            currency: "USD".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            time_zone: "America/New_York".to_string(),
            language: "en".to_string(),
            theme: "light".to_string(),
        },
        security: SecuritySettings {
            two_factor_enabled: false,
            session_timeout: 30,
            password_change_required: false,
        },
    }
}
