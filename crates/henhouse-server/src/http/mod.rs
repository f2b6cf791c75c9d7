// SPDX-License-Identifier: Apache-2.0

pub mod auth_routes;
pub mod clients;
pub mod feed;
pub mod finance;
pub mod flock;
pub mod handlers;
pub mod health_records;
pub mod production;
pub mod reminders;
pub mod reports;
pub mod settings;
pub mod staff;
